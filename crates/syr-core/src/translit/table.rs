use std::sync::OnceLock;

use tracing::debug_span;

use super::config::{parse_translit_toml, TranslitConfigError};
use super::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationTable {
    substitutions: Vec<(String, String)>,
}

impl TransliterationTable {
    pub fn new(substitutions: Vec<(String, String)>) -> Self {
        Self { substitutions }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TranslitConfigError> {
        Ok(Self::new(parse_translit_toml(toml_str)?))
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TranslitConfigError> {
        // Validate eagerly
        parse_translit_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TranslitConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static TransliterationTable {
        static INSTANCE: OnceLock<TransliterationTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("transliteration TOML must be valid")
        })
    }

    /// Apply every substitution to the whole text, in table order.
    pub fn apply(&self, text: &str) -> String {
        let _span = debug_span!(
            "transliterate",
            text_len = text.len(),
            rules = self.substitutions.len()
        )
        .entered();
        let mut out = text.to_string();
        for (source, target) in &self.substitutions {
            if out.contains(source.as_str()) {
                out = out.replace(source.as_str(), target);
            }
        }
        out
    }

    pub fn substitutions(&self) -> &[(String, String)] {
        &self.substitutions
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> TransliterationTable {
        TransliterationTable::new(
            pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        )
    }

    #[test]
    fn default_consonants() {
        let t = TransliterationTable::global();
        assert_eq!(t.apply("ܐܒ ܐܒ ܓ"), "ʾb ʾb g");
        assert_eq!(t.apply("ܫܠܡܐ"), "$lmʾ");
    }

    #[test]
    fn default_vowels_and_syame() {
        let t = TransliterationTable::global();
        assert_eq!(t.apply("ܡܲܠܲ̈ܐ"), "mala~ʾ");
    }

    #[test]
    fn untouched_characters_pass_through() {
        let t = TransliterationTable::global();
        // Western pthaha and Latin text are not in the default table.
        assert_eq!(t.apply("ܐ\u{0730} abc"), "ʾ\u{0730} abc");
        assert_eq!(t.apply(""), "");
    }

    #[test]
    fn order_matters() {
        // The second rule sees the output of the first.
        let chained = table(&[("ܐ", "x"), ("x", "y")]);
        assert_eq!(chained.apply("ܐx"), "yy");
        let reversed = table(&[("x", "y"), ("ܐ", "x")]);
        assert_eq!(reversed.apply("ܐx"), "xy");
    }

    #[test]
    fn multi_char_source() {
        let t = table(&[("ܫܠ", "SL"), ("ܫ", "sh")]);
        assert_eq!(t.apply("ܫܠܫ"), "SLsh");
    }

    #[test]
    fn from_toml_default() {
        let t = TransliterationTable::from_toml(DEFAULT_TOML).unwrap();
        assert_eq!(t.len(), 29);
        assert_eq!(&t, TransliterationTable::global());
    }
}
