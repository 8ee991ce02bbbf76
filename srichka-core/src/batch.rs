//! Batch syllabification
//!
//! Words are independent of each other, so a batch is split across the
//! rayon thread pool when the `parallel` feature is on. Output order
//! always matches input order.

use crate::syllabifier::{Syllabification, Syllabifier};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Syllabifier {
    /// Syllabify every word, preserving order
    pub fn syllabify_batch<S>(&self, words: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        map_words(words, |word| self.syllabify(word))
    }

    /// Analyze every word, preserving order
    pub fn analyze_batch<S>(&self, words: &[S]) -> Vec<Syllabification>
    where
        S: AsRef<str> + Sync,
    {
        map_words(words, |word| self.analyze(word))
    }
}

#[cfg(feature = "parallel")]
fn map_words<S, T, F>(words: &[S], f: F) -> Vec<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> T + Sync + Send,
{
    words.par_iter().map(|w| f(w.as_ref())).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_words<S, T, F>(words: &[S], f: F) -> Vec<T>
where
    S: AsRef<str>,
    F: Fn(&str) -> T,
{
    words.iter().map(|w| f(w.as_ref())).collect()
}
