//! Syllabification of Bulgarian words
//!
//! Words are split following the sonority sequencing principle: inside a
//! consonant cluster between two vowels, the next syllable starts where
//! sonority stops rising toward the second vowel. Bulgarian needs a few
//! corrections on top of that principle, all applied here:
//!
//! - clusters that stay together or split at a fixed point despite their
//!   sonority profile,
//! - "щ", one letter spelling two sounds,
//! - morphological prefixes ("без-", "раз-", ...) whose final consonant
//!   must not move into the next syllable,
//! - user-forced breaks written as `.` inside the word.
//!
//! # Architecture
//!
//! - [`letters`]: phonological classes of single letters
//! - [`sonority`]: ranks and per-cluster sonority contours
//! - [`forced_break`]: the `.` marker
//! - [`prefix`]: the prefix catalogue and separation points
//! - [`rules`]: TOML-backed rule tables, with the Bulgarian set embedded
//! - [`syllabifier`]: the boundary-finding cascade
//!
//! # Example
//!
//! ```rust
//! use srichka_core::Syllabifier;
//!
//! let syllabifier = Syllabifier::new();
//! assert_eq!(syllabifier.syllabify("безразличен"), vec!["без", "раз", "ли", "чен"]);
//! assert_eq!(syllabifier.syllabify("над.живея"), vec!["над", "жи", "ве", "я"]);
//! assert!(syllabifier.syllabify("").is_empty());
//! ```

pub mod batch;
pub mod error;
pub mod forced_break;
pub mod letters;
pub mod prefix;
pub mod rules;
pub mod sonority;
pub mod syllabifier;

pub use error::{Result, RulesError};
pub use letters::LetterClass;
pub use prefix::{PrefixCatalogue, SeparationPoints};
pub use rules::{RuleSet, RulesConfig};
pub use sonority::Sonority;
pub use syllabifier::{Boundary, OnsetRule, Syllabification, Syllabifier};

/// Split `word` into syllables with the built-in Bulgarian rules
pub fn syllabify(word: &str) -> Vec<String> {
    Syllabifier::new().syllabify(word)
}

/// Sonority ranks of `word[start..end]`, in char indices.
///
/// The word is taken as is, without trimming or lower-casing. `end` is
/// clamped to the word length.
pub fn sonority_contour(word: &str, start: usize, end: usize) -> Vec<u8> {
    let chars: Vec<char> = word.chars().collect();
    sonority::ranks(&sonority::model(&chars, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_syllabify() {
        assert_eq!(syllabify("барабан"), vec!["ба", "ра", "бан"]);
    }

    #[test]
    fn test_sonority_contour() {
        assert_eq!(sonority_contour("сестра", 0, 6), vec![1, 4, 1, 2, 3, 4]);
        assert_eq!(sonority_contour("общност", 1, 4), vec![2, 1, 2, 3]);
        assert_eq!(sonority_contour("джудже", 0, usize::MAX), vec![2, 4, 2, 4]);
        assert!(sonority_contour("сестра", 4, 2).is_empty());
    }
}
