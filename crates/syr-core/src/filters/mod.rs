//! Lexical filters over a word-frequency map.
//!
//! Each filter is a pure function of its input map and an explicit
//! configuration; none of them modify the input. Derived maps carry every
//! word over with its original count.

mod config;

pub use config::{ParticleConfig, SyameConfig, VocalizationConfig, DEFAULT_PARTICLES};

use tracing::{debug, debug_span};

use crate::frequency::FrequencyMap;

/// Words whose length in characters equals `length`. Every diacritic counts
/// as one character. Results follow the map's iteration order.
pub fn search_by_length(map: &FrequencyMap, length: usize) -> impl Iterator<Item = &str> + '_ {
    map.units().filter(move |word| word.chars().count() == length)
}

/// Words containing `pattern` as a contiguous substring, compared character
/// for character with no normalization. An empty pattern matches every word.
pub fn search_by_pattern<'a>(
    map: &'a FrequencyMap,
    pattern: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    map.units().filter(move |word| word.contains(pattern))
}

/// Disjoint split of a word map by presence of vowel marks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocalizationSplit {
    pub vocalized: FrequencyMap,
    pub unvocalized: FrequencyMap,
}

/// Partition `map` into words that contain at least one of the configured
/// vowels and words that contain none.
pub fn filter_vocalized(map: &FrequencyMap, config: &VocalizationConfig) -> VocalizationSplit {
    let _span = debug_span!("filter_vocalized", words = map.len()).entered();
    let mut split = VocalizationSplit::default();
    for (word, count) in map {
        if word.chars().any(|c| config.vowels.contains(&c)) {
            split.vocalized.insert_entry(word, count);
        } else {
            split.unvocalized.insert_entry(word, count);
        }
    }
    debug!(
        vocalized = split.vocalized.len(),
        unvocalized = split.unvocalized.len()
    );
    split
}

/// Words carrying the plural marker anywhere in the word.
pub fn filter_syame(map: &FrequencyMap, config: &SyameConfig) -> FrequencyMap {
    let _span = debug_span!("filter_syame", words = map.len()).entered();
    let mut result = FrequencyMap::new();
    for (word, count) in map {
        if word.contains(config.marker) {
            result.insert_entry(word, count);
        }
    }
    debug!(matched = result.len());
    result
}

/// Words grouped by the particle prefix they start with, in the order the
/// prefixes were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixGroups {
    groups: Vec<(String, FrequencyMap)>,
}

impl PrefixGroups {
    pub fn get(&self, prefix: &str) -> Option<&FrequencyMap> {
        self.groups
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, words)| words)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyMap)> + '_ {
        self.groups.iter().map(|(p, words)| (p.as_str(), words))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|(p, _)| p.as_str())
    }

    /// Number of prefixes, including those with no matching word.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Collect, for every configured prefix, the words that start with it.
///
/// This only proposes candidates for manual review. A word appears under
/// every prefix it starts with (so "ܘܕ…" lands under both "ܘ" and "ܘܕ"), and
/// nothing is stripped or checked against a lexicon. A prefix listed twice
/// keeps its first position.
pub fn filter_possible_prefixes(map: &FrequencyMap, config: &ParticleConfig) -> PrefixGroups {
    let _span = debug_span!(
        "filter_possible_prefixes",
        words = map.len(),
        prefixes = config.prefixes.len()
    )
    .entered();
    let mut groups: Vec<(String, FrequencyMap)> = Vec::with_capacity(config.prefixes.len());
    for prefix in &config.prefixes {
        if groups.iter().any(|(p, _)| p == prefix) {
            continue;
        }
        let mut words = FrequencyMap::new();
        for (word, count) in map {
            if word.starts_with(prefix.as_str()) {
                words.insert_entry(word, count);
            }
        }
        debug!(prefix = prefix.as_str(), matched = words.len());
        groups.push((prefix.clone(), words));
    }
    PrefixGroups { groups }
}
