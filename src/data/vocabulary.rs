// ============================================================
// Layer 4 — Vocabulary Statistics
// ============================================================
// Counts how often each word occurs across a corpus and ranks
// the words by count.
//
// FrequencyMap remembers first-seen order. Ranking uses a
// stable sort on count, so equal counts come out in first-seen
// order. That is a side effect of the stable sort rather than
// a promise; callers should not rely on tie order.
//
// Counting can be split across threads: each worker counts a
// contiguous slice and the partial maps are merged in slice
// order by summing counts per word.
//
// Why keep only the top-k words?
//   Word counts in speech follow a long tail. A few thousand
//   words cover most tokens, and every extra word adds a row to
//   the model's embedding table. Everything outside the top k
//   becomes _UNK_ (or is left out without it).
//
// Reference: rayon documentation (par_chunks, reduce)
//            Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::error::{PrepareError, PrepareResult};

/// Default number of words kept by `top_k`
pub const DEFAULT_TOP_K: usize = 1000;

/// Below this many words the parallel counter just counts in place
const PARALLEL_CHUNK: usize = 64 * 1024;

/// Word → occurrence count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    index:   HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    fn add_count(&mut self, word: &str, count: usize) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    /// Fold another map into this one, summing counts per word.
    /// Words new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (word, count) in other.entries {
            self.add_count(&word, count);
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of words counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for word in iter {
            map.add(word.as_ref());
        }
        map
    }
}

/// Count every word in one pass.
pub fn build_frequency_map<S: AsRef<str>>(words: &[S]) -> FrequencyMap {
    words.iter().collect()
}

/// Same result as `build_frequency_map`, counted on the rayon pool.
pub fn build_frequency_map_parallel<S: AsRef<str> + Sync>(words: &[S]) -> FrequencyMap {
    if words.len() <= PARALLEL_CHUNK {
        return build_frequency_map(words);
    }

    words
        .par_chunks(PARALLEL_CHUNK)
        .map(build_frequency_map)
        .reduce(FrequencyMap::new, |mut left, right| {
            left.merge(right);
            left
        })
}

/// Words ranked by descending count, with their counts alongside
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWords {
    pub words:  Vec<String>,
    pub counts: Vec<usize>,
}

impl RankedWords {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The `k` most frequent words. A `k` larger than the vocabulary
/// returns the whole vocabulary.
pub fn top_k(freq: &FrequencyMap, k: usize) -> PrepareResult<RankedWords> {
    if k == 0 {
        return Err(PrepareError::InvalidInput("top_k needs k > 0".to_string()));
    }

    let mut ranked: Vec<(&str, usize)> = freq.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(k);

    let (words, counts) = ranked
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .unzip();

    Ok(RankedWords { words, counts })
}

/// Count `words` and rank them in one go.
pub fn top_frequent_words<S: AsRef<str> + Sync>(words: &[S], k: usize) -> PrepareResult<RankedWords> {
    let freq = build_frequency_map_parallel(words);
    tracing::debug!(
        "Counted {} words, {} distinct",
        freq.total(),
        freq.len()
    );
    top_k(&freq, k)
}
