//! Syllable boundary detection
//!
//! The word is walked vowel to vowel. For every pair of neighbouring
//! vowels the onset of the second syllable is resolved by a fixed cascade
//! of rules; the first rule that applies wins.

use crate::forced_break;
use crate::letters::{self, SHCH};
use crate::rules::{self, RuleSet};
use crate::sonority;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Rule of the onset cascade that placed a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnsetRule {
    /// A user marker between the vowels
    ForcedBreak,
    /// No consonants between the vowels
    AdjacentVowels,
    /// A single intervocalic consonant starts the next syllable
    SingleConsonant,
    /// "щ" followed by a sonorant right before the vowel
    ShchSonorant,
    /// Cluster kept whole as the next onset
    KeepTogether,
    /// Cluster split at a fixed offset
    SplitException,
    /// Morphological prefix boundary
    PrefixBoundary,
    /// General rising-sonority principle
    RisingSonority,
}

impl OnsetRule {
    pub fn as_str(self) -> &'static str {
        match self {
            OnsetRule::ForcedBreak => "forced_break",
            OnsetRule::AdjacentVowels => "adjacent_vowels",
            OnsetRule::SingleConsonant => "single_consonant",
            OnsetRule::ShchSonorant => "shch_sonorant",
            OnsetRule::KeepTogether => "keep_together",
            OnsetRule::SplitException => "split_exception",
            OnsetRule::PrefixBoundary => "prefix_boundary",
            OnsetRule::RisingSonority => "rising_sonority",
        }
    }
}

impl fmt::Display for OnsetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syllable boundary inside the normalized word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Char index where the next syllable starts
    pub position: usize,
    /// Rule that decided it
    pub rule: OnsetRule,
}

/// Full result of syllabifying one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabification {
    /// Trimmed, lower-cased input; markers are still present
    pub word: String,
    /// Output syllables, markers stripped and spellings normalized
    pub syllables: Vec<String>,
    /// Internal boundaries, indexed into `word`
    pub boundaries: Vec<Boundary>,
    /// Prefix boundaries found for `word`
    pub separation_points: Vec<usize>,
}

impl Syllabification {
    /// Syllables joined with `separator`
    pub fn joined(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }
}

/// Characters strictly between two neighbouring vowels
struct Span<'a> {
    word: &'a [char],
    left: usize,
    right: usize,
}

impl<'a> Span<'a> {
    fn cluster(&self) -> &'a [char] {
        &self.word[self.left + 1..self.right]
    }

    fn len(&self) -> usize {
        self.right - self.left - 1
    }
}

/// Per-word state shared by the cascade
struct Context<'a> {
    rules: &'a RuleSet,
    separation_points: &'a [usize],
}

type Resolver = fn(&Context<'_>, &Span<'_>) -> Option<usize>;

/// Evaluated in order; the first resolver that returns an onset wins.
const CASCADE: [(OnsetRule, Resolver); 8] = [
    (OnsetRule::ForcedBreak, forced_break_onset),
    (OnsetRule::AdjacentVowels, adjacent_vowels_onset),
    (OnsetRule::SingleConsonant, single_consonant_onset),
    (OnsetRule::ShchSonorant, shch_sonorant_onset),
    (OnsetRule::KeepTogether, keep_together_onset),
    (OnsetRule::SplitException, split_exception_onset),
    (OnsetRule::PrefixBoundary, prefix_boundary_onset),
    (OnsetRule::RisingSonority, rising_sonority_onset),
];

fn forced_break_onset(_ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    forced_break::find_forced_break(span.word, span.left + 1, span.right).map(|pos| pos + 1)
}

fn adjacent_vowels_onset(_ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    (span.len() == 0).then_some(span.right)
}

fn single_consonant_onset(_ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    (span.len() == 1).then_some(span.left + 1)
}

// щ + sonorant technically rises, but щнV, щлV and the like are unnatural.
// Only "щр" is a valid onset; otherwise the sonorant starts the syllable.
fn shch_sonorant_onset(_ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    if span.len() < 2 || span.word[span.right - 2] != SHCH {
        return None;
    }

    let penult = span.word[span.right - 1];
    if penult == 'р' {
        Some(span.right - 2)
    } else if letters::is_sonorant(penult) {
        Some(span.right - 1)
    } else {
        None
    }
}

fn keep_together_onset(ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    ctx.rules
        .clusters()
        .is_kept(span.cluster())
        .then_some(span.left + 1)
}

fn split_exception_onset(ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    ctx.rules
        .clusters()
        .split_offset(span.cluster())
        .map(|offset| span.left + 1 + offset)
}

fn prefix_boundary_onset(ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    ctx.separation_points
        .iter()
        .copied()
        .find(|&pos| pos > span.left && pos < span.right)
}

fn rising_sonority_onset(_ctx: &Context<'_>, span: &Span<'_>) -> Option<usize> {
    let contour = sonority::model(span.word, span.left + 1, span.right);
    // A cluster of palatalizers only has no contour at all
    Some(sonority::rising_break(&contour).unwrap_or(span.left + 1))
}

/// Splits words into syllables using a [`RuleSet`]
#[derive(Debug, Clone)]
pub struct Syllabifier {
    rules: Arc<RuleSet>,
}

impl Syllabifier {
    /// Syllabifier with the built-in Bulgarian rules
    pub fn new() -> Self {
        Self::with_rules(rules::bulgarian())
    }

    /// Syllabifier with custom rules
    pub fn with_rules(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Split `word` into syllables.
    ///
    /// Surrounding whitespace is ignored and the word is lower-cased. Empty
    /// input yields no syllables.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        self.analyze(word).syllables
    }

    /// Like [`syllabify`](Self::syllabify), also reporting how each boundary was found
    pub fn analyze(&self, word: &str) -> Syllabification {
        let normalized = normalize_word(word);
        if normalized.is_empty() {
            return Syllabification::default();
        }

        let chars: Vec<char> = normalized.chars().collect();

        let (boundaries, separation_points) = if letters::count_vowels(&normalized) <= 1 {
            (Vec::new(), Vec::new())
        } else {
            self.find_boundaries(&chars)
        };

        let mut starts = Vec::with_capacity(boundaries.len() + 1);
        starts.push(0);
        starts.extend(boundaries.iter().map(|b| b.position));

        let syllables: Vec<String> = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(chars.len());
                self.normalize_syllable(&chars[start..end])
            })
            .filter(|syllable| !syllable.is_empty())
            .collect();

        Syllabification {
            word: normalized,
            syllables,
            boundaries,
            separation_points,
        }
    }

    fn find_boundaries(&self, word: &[char]) -> (Vec<Boundary>, Vec<usize>) {
        let separation_points = self.rules.prefixes().find_separation_points(word);
        if !separation_points.is_empty() {
            log::debug!("Prefix separation points {separation_points:?}");
        }

        let ctx = Context {
            rules: &self.rules,
            separation_points: &separation_points,
        };

        let mut boundaries = Vec::new();
        let mut prev_vowel = None;

        for (i, &ch) in word.iter().enumerate() {
            if !letters::is_vowel(ch) {
                continue;
            }

            if let Some(left) = prev_vowel {
                let span = Span {
                    word,
                    left,
                    right: i,
                };
                let boundary = resolve_onset(&ctx, &span);
                log::trace!(
                    "Onset at {} between vowels {} and {} ({})",
                    boundary.position,
                    left,
                    i,
                    boundary.rule
                );
                boundaries.push(boundary);
            }

            prev_vowel = Some(i);
        }

        (boundaries, separation_points)
    }

    fn normalize_syllable(&self, syllable: &[char]) -> String {
        let text: String = syllable.iter().collect();
        self.rules
            .spellings()
            .apply(&forced_break::strip_markers(&text))
    }
}

impl Default for Syllabifier {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_onset(ctx: &Context<'_>, span: &Span<'_>) -> Boundary {
    CASCADE
        .iter()
        .find_map(|&(rule, resolve)| {
            resolve(ctx, span).map(|position| Boundary { position, rule })
        })
        .unwrap_or(Boundary {
            position: span.left + 1,
            rule: OnsetRule::RisingSonority,
        })
}

fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
