use serde::Deserialize;

#[derive(Deserialize)]
struct TranslitConfig {
    substitutions: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslitConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("substitutions table is empty")]
    Empty,
    #[error("empty source in substitution #{0}")]
    EmptySource(usize),
    #[error("transliteration table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the ordered substitution list.
///
/// Order is kept exactly as written. An empty target is allowed (it deletes
/// the source); an empty source is not.
pub fn parse_translit_toml(toml_str: &str) -> Result<Vec<(String, String)>, TranslitConfigError> {
    let config: TranslitConfig =
        toml::from_str(toml_str).map_err(|e| TranslitConfigError::Parse(e.to_string()))?;

    if config.substitutions.is_empty() {
        return Err(TranslitConfigError::Empty);
    }

    for (i, (source, _)) in config.substitutions.iter().enumerate() {
        if source.is_empty() {
            return Err(TranslitConfigError::EmptySource(i));
        }
    }

    Ok(config.substitutions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
substitutions = [
    ["ܒ", "b"],
    ["ܐ", "'"],
]
"#;
        let subs = parse_translit_toml(toml).unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0], ("ܒ".to_string(), "b".to_string()));
        assert_eq!(subs[1], ("ܐ".to_string(), "'".to_string()));
    }

    #[test]
    fn parse_default_toml() {
        let subs = parse_translit_toml(super::super::DEFAULT_TOML).unwrap();
        assert_eq!(subs.len(), 29);
        assert_eq!(subs[0], ("ܐ".to_string(), "ʾ".to_string()));
        assert_eq!(subs[28], ("\u{0308}".to_string(), "~".to_string()));
    }

    #[test]
    fn empty_target_allowed() {
        let subs = parse_translit_toml("substitutions = [[\"܀\", \"\"]]").unwrap();
        assert_eq!(subs[0].1, "");
    }

    #[test]
    fn error_empty_table() {
        let err = parse_translit_toml("substitutions = []").unwrap_err();
        assert!(matches!(err, TranslitConfigError::Empty));
    }

    #[test]
    fn error_empty_source() {
        let toml = r#"substitutions = [["ܒ", "b"], ["", "x"]]"#;
        let err = parse_translit_toml(toml).unwrap_err();
        assert!(matches!(err, TranslitConfigError::EmptySource(1)));
    }

    #[test]
    fn error_wrong_arity() {
        let err = parse_translit_toml(r#"substitutions = [["ܒ"]]"#).unwrap_err();
        assert!(matches!(err, TranslitConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_translit_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TranslitConfigError::Parse(_)));
    }
}
