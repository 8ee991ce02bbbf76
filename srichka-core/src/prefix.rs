//! Morphological prefix awareness
//!
//! Rising sonority alone misplaces some boundaries: in "безличен" the
//! cluster "зл" rises, so the naive rule would glue the prefix's final "з"
//! onto the next syllable ("бе-зли-чен"). The catalogue here reports the
//! prefix boundary for exactly those words so the syllabifier can keep
//! "без-" together.
//!
//! Prefixes stack ("без" + "раз" in "безразличен"), so the catalogue holds
//! compound forms next to the simple ones and every entry that matches a
//! word contributes independently.

use crate::error::{Result, RulesError};
use crate::letters;
use crate::sonority;
use std::collections::HashSet;

/// Ordered prefix boundaries within one word (char indices)
pub type SeparationPoints = Vec<usize>;

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    text: String,
    letters: Vec<char>,
    parts: Vec<String>,
}

impl PrefixEntry {
    fn new(parts: Vec<String>) -> Self {
        let text: String = parts.concat();
        let letters = text.chars().collect();
        Self {
            text,
            letters,
            parts,
        }
    }

    /// Full prefix text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Simple prefixes this entry is stacked from
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Length in letters, which is also the separation index it reports
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_compound(&self) -> bool {
        self.parts.len() > 1
    }

    fn matches(&self, word: &[char]) -> bool {
        word.starts_with(&self.letters)
    }

    fn last_letter(&self) -> Option<char> {
        self.letters.last().copied()
    }
}

/// Validated prefix catalogue, most specific entry first
#[derive(Debug, Clone, Default)]
pub struct PrefixCatalogue {
    entries: Vec<PrefixEntry>,
}

impl PrefixCatalogue {
    /// Build and validate a catalogue.
    ///
    /// Every compound part must be listed in `simple` or `leading`. Entries
    /// that can both match one word must be stacked forms of each other.
    pub fn new(simple: &[String], leading: &[String], compound: &[Vec<String>]) -> Result<Self> {
        for prefix in simple.iter().chain(leading) {
            check_letters(prefix)?;
        }

        let known: HashSet<&str> = simple.iter().chain(leading).map(String::as_str).collect();

        let mut entries = Vec::with_capacity(compound.len() + simple.len());
        for parts in compound {
            if parts.len() < 2 {
                return Err(RulesError::InvalidPrefix {
                    prefix: parts.concat(),
                    reason: "a compound prefix needs at least two parts".to_string(),
                });
            }
            if let Some(unknown) = parts.iter().find(|p| !known.contains(p.as_str())) {
                return Err(RulesError::InvalidPrefix {
                    prefix: parts.concat(),
                    reason: format!("part '{unknown}' is not a declared prefix"),
                });
            }
            entries.push(PrefixEntry::new(parts.clone()));
        }
        entries.extend(simple.iter().map(|p| PrefixEntry::new(vec![p.clone()])));

        check_entries(&entries)?;
        check_nesting(&entries)?;

        // Longest first; the sort is stable so equal lengths keep their order
        entries.sort_by(|a, b| b.len().cmp(&a.len()));

        Ok(Self { entries })
    }

    /// Catalogue entries in evaluation order
    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries the word starts with
    pub fn matching<'a>(&'a self, word: &'a [char]) -> impl Iterator<Item = &'a PrefixEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.matches(word))
    }

    /// Prefix boundaries the general sonority rule would miss.
    ///
    /// A matching prefix reports its length when the next letter is a
    /// consonant of strictly higher sonority than the prefix's last letter.
    pub fn find_separation_points(&self, word: &[char]) -> SeparationPoints {
        let mut points = SeparationPoints::new();

        for entry in self.matching(word) {
            let Some(&next) = word.get(entry.len()) else {
                continue;
            };

            // Prefixes followed by vowels do get broken up
            if letters::is_vowel(next) {
                continue;
            }

            let Some(last) = entry.last_letter() else {
                continue;
            };

            if sonority::rank(last) < sonority::rank(next) {
                points.push(entry.len());
            }
        }

        points.sort_unstable();
        points.dedup();
        points
    }
}

fn check_letters(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(RulesError::InvalidPrefix {
            prefix: String::new(),
            reason: "empty prefix".to_string(),
        });
    }

    if let Some(ch) = prefix.chars().find(|&ch| !letters::is_bulgarian_letter(ch)) {
        return Err(RulesError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: format!("'{ch}' is not a lower-case Bulgarian letter"),
        });
    }

    Ok(())
}

fn check_entries(entries: &[PrefixEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !entry.last_letter().is_some_and(letters::is_consonant) {
            return Err(RulesError::InvalidPrefix {
                prefix: entry.text.clone(),
                reason: "a catalogue prefix must end in a consonant".to_string(),
            });
        }
        if !seen.insert(entry.text.as_str()) {
            return Err(RulesError::DuplicatePrefix(entry.text.clone()));
        }
    }
    Ok(())
}

/// Any two entries where one starts with the other must share their leading parts.
fn check_nesting(entries: &[PrefixEntry]) -> Result<()> {
    for shorter in entries {
        for longer in entries {
            if longer.len() > shorter.len()
                && shorter.matches(&longer.letters)
                && !longer.parts.starts_with(&shorter.parts)
            {
                return Err(RulesError::AmbiguousPrefixes {
                    shorter: shorter.text.clone(),
                    longer: longer.text.clone(),
                });
            }
        }
    }
    Ok(())
}
