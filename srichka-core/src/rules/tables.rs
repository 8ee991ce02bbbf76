//! Runtime tables for rule lookups
//!
//! Lookups take the cluster as a char slice and never allocate.

use crate::error::{Result, RulesError};
use crate::letters;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Consonant clusters whose break point ignores the sonority contour
#[derive(Debug, Clone, Default)]
pub struct ClusterTable {
    keep: HashSet<Vec<char>>,
    split: HashMap<Vec<char>, usize>,
}

impl ClusterTable {
    /// Build from keep-together clusters and split offsets.
    ///
    /// Cluster letters must be classified Bulgarian letters or letters
    /// that `spellings` rewrites.
    pub fn new(
        keep: &[String],
        split: &BTreeMap<String, usize>,
        spellings: &SpellingTable,
    ) -> Result<Self> {
        let mut keep_set = HashSet::with_capacity(keep.len());
        for cluster in keep {
            let cluster_chars = cluster_letters(cluster, spellings)?;
            if split.contains_key(cluster) {
                return Err(invalid(cluster, "listed both as kept and as split"));
            }
            keep_set.insert(cluster_chars);
        }

        let mut split_map = HashMap::with_capacity(split.len());
        for (cluster, &offset) in split {
            let cluster_chars = cluster_letters(cluster, spellings)?;
            if offset == 0 || offset >= cluster_chars.len() {
                return Err(invalid(
                    cluster,
                    &format!("offset {offset} is not inside the cluster"),
                ));
            }
            split_map.insert(cluster_chars, offset);
        }

        Ok(Self {
            keep: keep_set,
            split: split_map,
        })
    }

    /// Whether the whole cluster stays together as the next onset
    #[inline]
    pub fn is_kept(&self, cluster: &[char]) -> bool {
        self.keep.contains(cluster)
    }

    /// Zero-based break offset for a cluster that must be split
    #[inline]
    pub fn split_offset(&self, cluster: &[char]) -> Option<usize> {
        self.split.get(cluster).copied()
    }

    pub fn keep_count(&self) -> usize {
        self.keep.len()
    }

    pub fn split_count(&self) -> usize {
        self.split.len()
    }
}

fn cluster_letters(cluster: &str, spellings: &SpellingTable) -> Result<Vec<char>> {
    let cluster_chars: Vec<char> = cluster.chars().collect();

    if cluster_chars.len() < 2 {
        return Err(invalid(cluster, "a cluster needs at least two letters"));
    }
    if cluster_chars.iter().any(|&ch| letters::is_vowel(ch)) {
        return Err(invalid(cluster, "a cluster cannot contain vowels"));
    }
    if let Some(ch) = cluster_chars
        .iter()
        .find(|&&ch| !letters::is_bulgarian_letter(ch) && !spellings.is_respelled(ch))
    {
        return Err(invalid(
            cluster,
            &format!("'{ch}' is neither a Bulgarian letter nor a respelled one"),
        ));
    }

    Ok(cluster_chars)
}

fn invalid(cluster: &str, reason: &str) -> RulesError {
    RulesError::InvalidCluster {
        cluster: cluster.to_string(),
        reason: reason.to_string(),
    }
}

/// Alternate letters rewritten to their default spelling in the output
#[derive(Debug, Clone, Default)]
pub struct SpellingTable {
    rewrites: HashMap<char, char>,
}

impl SpellingTable {
    /// Build from (letter, written) pairs
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Result<Self> {
        let mut rewrites = HashMap::new();

        for (letter, written) in pairs {
            if letters::is_vowel(letter) {
                return Err(RulesError::InvalidSpelling {
                    letter,
                    reason: "vowels cannot be respelled".to_string(),
                });
            }
            if letter == crate::forced_break::MARKER {
                return Err(RulesError::InvalidSpelling {
                    letter,
                    reason: "the forced-break marker cannot be respelled".to_string(),
                });
            }
            if rewrites.insert(letter, written).is_some() {
                return Err(RulesError::InvalidSpelling {
                    letter,
                    reason: "mapped more than once".to_string(),
                });
            }
        }

        Ok(Self { rewrites })
    }

    /// Rewrite every alternate letter in `text`
    pub fn apply(&self, text: &str) -> String {
        if self.rewrites.is_empty() {
            return text.to_string();
        }
        text.chars()
            .map(|ch| self.rewrites.get(&ch).copied().unwrap_or(ch))
            .collect()
    }

    /// Whether `letter` has an alternate spelling
    pub fn is_respelled(&self, letter: char) -> bool {
        self.rewrites.contains_key(&letter)
    }

    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }
}
