use std::path::Path;

use tracing::info;

use syr_core::export;
use syr_core::filters::{filter_syame, filter_vocalized};
use syr_core::frequency::{
    word_frequencies, FrequencyMap, OrderError, OrderedFrequencyMap, SortMode,
};
use syr_core::inventory::{char_frequencies, class_totals};
use syr_core::settings::{settings, Settings};
use syr_core::text::{self, NormalizeConfig};
use syr_core::translit::TransliterationTable;

use crate::table::format_counts;

/// Normalize raw text and optionally transliterate it.
pub fn prepare_text(
    raw: &str,
    normalize: &NormalizeConfig,
    table: Option<&TransliterationTable>,
) -> String {
    let processed = text::process(raw, normalize);
    match table {
        Some(t) => t.apply(&processed),
        None => processed,
    }
}

/// Load `input` and run [`prepare_text`] with the global configuration.
pub(crate) fn load_corpus(input: &str, latin: bool) -> String {
    let raw = die!(
        text::read_document(Path::new(input)),
        "Error reading {input}: {}"
    );
    let table = latin.then(TransliterationTable::global);
    let prepared = prepare_text(&raw, &settings().normalize, table);
    info!(input, bytes = prepared.len(), latin, "loaded corpus");
    prepared
}

/// Parse an optional `--sort` value. Commands call this before loading any
/// input so a bad mode fails without doing work.
pub fn parse_sort_mode(arg: Option<&str>) -> Result<Option<SortMode>, OrderError> {
    arg.map(str::parse::<SortMode>).transpose()
}

pub(crate) fn sort_mode_arg(arg: Option<&str>) -> Option<SortMode> {
    die!(parse_sort_mode(arg), "Error: {}")
}

/// Print `map` as a table, or write it as `key,value` lines when `output`
/// is set. Printing defaults to frequency order; export keeps map order
/// unless a mode is given.
pub(crate) fn emit(
    map: &FrequencyMap,
    sort_mode: Option<SortMode>,
    output: Option<&str>,
    limit: Option<usize>,
) {
    match output {
        Some(path) => {
            die!(export_map(map, sort_mode, Path::new(path)), "Error writing {path}: {}");
            eprintln!("Wrote {path} ({} entries)", map.len());
        }
        None => {
            let sorted =
                OrderedFrequencyMap::new(map, sort_mode.unwrap_or(SortMode::Frequency));
            print!("{}", format_counts(sorted.iter(), limit));
        }
    }
}

fn export_map(
    map: &FrequencyMap,
    sort_mode: Option<SortMode>,
    path: &Path,
) -> Result<(), export::ExportError> {
    match sort_mode {
        Some(mode) => export::write_pairs(path, OrderedFrequencyMap::new(map, mode).iter()),
        None => export::write_pairs(path, map.iter()),
    }
}

pub fn normalize(input: &str, output: Option<&str>) {
    let prepared = load_corpus(input, false);
    write_or_print(&prepared, output);
}

pub fn translit(input: &str, output: Option<&str>) {
    let prepared = load_corpus(input, true);
    write_or_print(&prepared, output);
}

fn write_or_print(text: &str, output: Option<&str>) {
    match output {
        Some(path) => {
            die!(
                export::save_text(Path::new(path), text),
                "Error writing {path}: {}"
            );
            eprintln!("Wrote {path} ({} bytes)", text.len());
        }
        None => println!("{text}"),
    }
}

pub fn chars(
    input: &str,
    latin: bool,
    sort_mode: Option<&str>,
    output: Option<&str>,
    limit: Option<usize>,
) {
    let mode = sort_mode_arg(sort_mode);
    let prepared = load_corpus(input, latin);
    emit(&char_frequencies(&prepared), mode, output, limit);
}

pub fn words(
    input: &str,
    latin: bool,
    sort_mode: Option<&str>,
    output: Option<&str>,
    limit: Option<usize>,
) {
    let mode = sort_mode_arg(sort_mode);
    let prepared = load_corpus(input, latin);
    emit(&word_frequencies(&prepared), mode, output, limit);
}

pub fn stats(input: &str) {
    let prepared = load_corpus(input, false);
    print!("{}", format_stats(&prepared, settings()));
}

/// Summary of a prepared text: token/type counts, character classes, and
/// the share of vocalized and syame-marked words.
pub fn format_stats(prepared: &str, settings: &Settings) -> String {
    let words = word_frequencies(prepared);
    let inventory = char_frequencies(prepared);
    let split = filter_vocalized(&words, &settings.vocalization);
    let syame = filter_syame(&words, &settings.syame);

    let mut out = String::new();
    out.push_str(&format!("tokens:      {}\n", words.total()));
    out.push_str(&format!("types:       {}\n", words.len()));
    out.push_str(&format!(
        "characters:  {} ({} distinct)\n",
        inventory.total(),
        inventory.len()
    ));
    for (class, count) in class_totals(&inventory) {
        out.push_str(&format!("  {:<13}{count}\n", class.label()));
    }
    out.push_str(&format!(
        "vocalized:   {} types, {} tokens\n",
        split.vocalized.len(),
        split.vocalized.total()
    ));
    out.push_str(&format!(
        "unvocalized: {} types, {} tokens\n",
        split.unvocalized.len(),
        split.unvocalized.total()
    ));
    out.push_str(&format!(
        "syame:       {} types, {} tokens\n",
        syame.len(),
        syame.total()
    ));
    out
}
