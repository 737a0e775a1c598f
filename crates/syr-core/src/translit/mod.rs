//! Syriac-to-Latin transliteration.
//!
//! The table is an ordered list of `(source, target)` substitutions loaded
//! from TOML. The embedded default covers the consonants, the Eastern vowel
//! marks and syame.

mod config;
mod table;

pub use config::{parse_translit_toml, TranslitConfigError};
pub use table::TransliterationTable;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_translit.toml");

/// Returns the embedded default transliteration TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
