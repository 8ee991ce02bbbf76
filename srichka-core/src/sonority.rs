//! Sonority hierarchy and per-cluster sonority contours
//!
//! Ranks run fricative (1) < stop/affricate (2) < sonorant (3) < vowel (4);
//! anything unclassified gets 0.

use crate::letters::{self, PALATALIZER, SHCH};
use smallvec::SmallVec;

/// Rank of letters the classifier does not know
pub const RANK_NONE: u8 = 0;
pub const RANK_FRICATIVE: u8 = 1;
pub const RANK_STOP: u8 = 2;
pub const RANK_AFFRICATE: u8 = RANK_STOP;
pub const RANK_SONORANT: u8 = 3;
pub const RANK_VOWEL: u8 = 4;

/// Stop letters that merge with the following letter into one affricate sound
const AFFRICATE_DIGRAPHS: [(char, char); 1] = [('д', 'ж')];

/// One sound unit within a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sonority {
    /// Position in the sonority hierarchy
    pub rank: u8,
    /// Index of the first letter realizing this sound.
    ///
    /// "дж" yields one unit at the index of "д"; "щ" yields two units
    /// that share its index.
    pub first_index: usize,
}

impl Sonority {
    pub fn new(rank: u8, first_index: usize) -> Self {
        Self { rank, first_index }
    }
}

/// Sound units of a consonant cluster; almost always a handful of entries
pub type SonorityContour = SmallVec<[Sonority; 8]>;

/// Sonority rank of a single letter
pub fn rank(ch: char) -> u8 {
    if letters::is_fricative(ch) {
        RANK_FRICATIVE
    } else if letters::is_stop(ch) || letters::is_affricate(ch) {
        RANK_STOP
    } else if letters::is_sonorant(ch) {
        RANK_SONORANT
    } else if letters::is_vowel(ch) {
        RANK_VOWEL
    } else {
        RANK_NONE
    }
}

/// Build the sonority contour of `word[start..end]` (char indices).
///
/// `end` is clamped to the word length; an empty range gives an empty contour.
pub fn model(word: &[char], start: usize, end: usize) -> SonorityContour {
    let end = end.min(word.len());
    let mut contour = SonorityContour::new();

    let mut i = start;
    while i < end {
        let curr = word[i];

        if curr == SHCH {
            // One letter, two sounds
            contour.push(Sonority::new(rank('ш'), i));
            contour.push(Sonority::new(rank('т'), i));
            i += 1;
        } else if i + 1 < end && is_affricate_digraph(curr, word[i + 1]) {
            contour.push(Sonority::new(RANK_AFFRICATE, i));
            i += 2;
        } else {
            if curr != PALATALIZER {
                contour.push(Sonority::new(rank(curr), i));
            }
            i += 1;
        }
    }

    contour
}

/// Ranks only, in order
pub fn ranks(contour: &[Sonority]) -> Vec<u8> {
    contour.iter().map(|s| s.rank).collect()
}

/// Index of the first unit whose rank does not rise above its predecessor.
///
/// When sonority rises through the whole contour the cluster is a legal
/// onset and the first unit's index is returned. `None` only for an empty
/// contour.
pub fn rising_break(contour: &[Sonority]) -> Option<usize> {
    let first = contour.first()?;

    let mut prev_rank = None;
    for curr in contour {
        if prev_rank.is_some_and(|prev| curr.rank <= prev) {
            return Some(curr.first_index);
        }
        prev_rank = Some(curr.rank);
    }

    Some(first.first_index)
}

#[inline]
fn is_affricate_digraph(first: char, second: char) -> bool {
    AFFRICATE_DIGRAPHS.contains(&(first, second))
}
