use std::path::Path;
use std::process;

use syr_core::export;
use syr_core::filters::{
    filter_possible_prefixes, filter_syame, filter_vocalized, search_by_length,
    search_by_pattern, ParticleConfig, PrefixGroups,
};
use syr_core::frequency::{word_frequencies, FrequencyMap};
use syr_core::settings::settings;

use super::corpus_ops::{emit, load_corpus, sort_mode_arg};
use crate::table::format_counts;

/// Words matching every given criterion, in alphabetical order.
pub fn search_words(
    map: &FrequencyMap,
    length: Option<usize>,
    pattern: Option<&str>,
) -> Vec<String> {
    let mut found: Vec<String> = match (length, pattern) {
        (Some(n), Some(p)) => search_by_length(map, n)
            .filter(|w| w.contains(p))
            .map(str::to_string)
            .collect(),
        (Some(n), None) => search_by_length(map, n).map(str::to_string).collect(),
        (None, Some(p)) => search_by_pattern(map, p).map(str::to_string).collect(),
        (None, None) => map.units().map(str::to_string).collect(),
    };
    found.sort_unstable();
    found
}

pub fn search(input: &str, latin: bool, length: Option<usize>, pattern: Option<&str>) {
    if length.is_none() && pattern.is_none() {
        eprintln!("Error: give --length, --pattern, or both");
        process::exit(1);
    }
    let words = word_frequencies(&load_corpus(input, latin));
    let found = search_words(&words, length, pattern);
    for word in &found {
        println!("{word}");
    }
    eprintln!("{} matches", found.len());
}

pub fn vocalized(
    input: &str,
    sort_mode: Option<&str>,
    vocalized_out: Option<&str>,
    unvocalized_out: Option<&str>,
) {
    let mode = sort_mode_arg(sort_mode);
    let words = word_frequencies(&load_corpus(input, false));
    let split = filter_vocalized(&words, &settings().vocalization);
    println!(
        "vocalized:   {} types, {} tokens",
        split.vocalized.len(),
        split.vocalized.total()
    );
    println!(
        "unvocalized: {} types, {} tokens",
        split.unvocalized.len(),
        split.unvocalized.total()
    );
    if let Some(path) = vocalized_out {
        emit(&split.vocalized, mode, Some(path), None);
    }
    if let Some(path) = unvocalized_out {
        emit(&split.unvocalized, mode, Some(path), None);
    }
}

pub fn syame(input: &str, sort_mode: Option<&str>, output: Option<&str>, limit: Option<usize>) {
    let mode = sort_mode_arg(sort_mode);
    let words = word_frequencies(&load_corpus(input, false));
    let plural = filter_syame(&words, &settings().syame);
    emit(&plural, mode, output, limit);
}

/// Particle candidates. With `prefix`, only that prefix is searched and its
/// words are listed or exported. Without it, every configured prefix is
/// summarized as `prefix,word-count` in configured order, which takes no
/// sort mode.
pub fn particles(
    input: &str,
    prefix: Option<&str>,
    sort_mode: Option<&str>,
    output: Option<&str>,
    limit: Option<usize>,
) {
    let mode = sort_mode_arg(sort_mode);
    if prefix.is_none() && mode.is_some() {
        eprintln!("Error: --sort needs --prefix");
        process::exit(1);
    }
    let words = word_frequencies(&load_corpus(input, false));
    match prefix {
        Some(p) => {
            let config = ParticleConfig {
                prefixes: vec![p.to_string()],
            };
            let groups = filter_possible_prefixes(&words, &config);
            let empty = FrequencyMap::new();
            emit(groups.get(p).unwrap_or(&empty), mode, output, limit);
        }
        None => {
            let groups = filter_possible_prefixes(&words, &settings().particles);
            match output {
                Some(path) => {
                    die!(
                        export::write_pairs(Path::new(path), group_sizes(&groups)),
                        "Error writing {path}: {}"
                    );
                    eprintln!("Wrote {path} ({} prefixes)", groups.len());
                }
                None => print!("{}", format_counts(group_sizes(&groups), limit)),
            }
        }
    }
}

/// `(prefix, number of candidate words)` in configured prefix order.
pub fn group_sizes(groups: &PrefixGroups) -> Vec<(&str, u64)> {
    groups
        .iter()
        .map(|(prefix, words)| (prefix, words.len() as u64))
        .collect()
}
