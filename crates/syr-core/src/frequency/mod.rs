//! Frequency mappings over text units.
//!
//! `FrequencyMap` counts occurrences of characters or words. It is built once
//! from an immutable text and never updated in place afterwards; every filter
//! and ordering derives a new structure from it.

mod order;
#[cfg(test)]
mod tests;

pub use order::{sort, OrderError, OrderedFrequencyMap, SortMode};

use std::collections::hash_map;
use std::collections::HashMap;

use tracing::{debug, debug_span};

/// Separator between words in normalized text.
pub const WORD_SEPARATOR: char = ' ';

/// A mapping from text unit to a positive occurrence count.
///
/// Invariants: the empty string is never a key, and every count is at least 1.
/// Iteration order is unspecified; use [`sort`] for a defined order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(unit, count)` pairs. Empty units and zero counts are
    /// dropped; repeated units have their counts summed.
    pub fn from_counts<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u64)>,
    {
        let mut map = Self::new();
        for (unit, count) in pairs {
            let unit = unit.into();
            if unit.is_empty() || count == 0 {
                continue;
            }
            *map.counts.entry(unit).or_insert(0) += count;
        }
        map
    }

    /// Count one occurrence of `unit`. Empty units are ignored.
    pub(crate) fn record(&mut self, unit: &str) {
        if unit.is_empty() {
            return;
        }
        match self.counts.get_mut(unit) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(unit.to_string(), 1);
            }
        }
    }

    /// Copy `unit` with its count into this map. Used by filters to carry
    /// entries over from a base map unchanged.
    pub(crate) fn insert_entry(&mut self, unit: &str, count: u64) {
        debug_assert!(!unit.is_empty() && count > 0);
        self.counts.insert(unit.to_string(), count);
    }

    pub fn get(&self, unit: &str) -> Option<u64> {
        self.counts.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.counts.contains_key(unit)
    }

    /// Number of distinct units.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (token count for a word map).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    pub fn units(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count every distinct word in `text`, splitting strictly on
/// [`WORD_SEPARATOR`].
///
/// No whitespace collapsing happens here: doubled, leading or trailing
/// separators produce empty substrings, which are skipped. Line breaks are
/// ordinary characters at this stage, so callers should run
/// [`crate::text::process`] first.
pub fn word_frequencies(text: &str) -> FrequencyMap {
    word_frequencies_with(text, WORD_SEPARATOR)
}

/// Same as [`word_frequencies`] with a caller-chosen separator.
pub fn word_frequencies_with(text: &str, separator: char) -> FrequencyMap {
    let _span = debug_span!("word_frequencies", text_len = text.len()).entered();
    let mut map = FrequencyMap::new();
    for word in text.split(separator) {
        map.record(word);
    }
    debug!(types = map.len(), tokens = map.total());
    map
}
