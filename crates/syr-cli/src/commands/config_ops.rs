use std::fs;

use syr_core::settings;
use syr_core::translit::{self, TransliterationTable};

/// Install custom settings and transliteration tables before any command
/// reads them.
pub fn init_custom(settings_file: Option<&str>, translit_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
        tracing::info!(file, "using custom settings");
    }
    if let Some(file) = translit_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            TransliterationTable::init_custom(content),
            "Error in {file}: {}"
        );
        tracing::info!(file, "using custom transliteration table");
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, syame marker U+{:04X}, {} particle prefixes, {} punctuation marks",
        s.vocalization.vowels.len(),
        s.syame.marker as u32,
        s.particles.prefixes.len(),
        s.normalize.punctuation.len()
    );
}

pub fn translit_export() {
    print!("{}", translit::default_toml());
}

pub fn translit_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let subs = die!(translit::parse_translit_toml(&content), "Error: {}");
    println!("OK: {} substitutions", subs.len());
}
