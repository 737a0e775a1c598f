//! Loading and normalizing source documents.
//!
//! The output of [`process`] is what the word index expects: a single line
//! of words separated by single spaces, with punctuation removed.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, debug_span};

/// Punctuation removed by default: Latin `.`, `,`, `:` and the Syriac
/// colon-like marks and end-of-paragraph mark.
pub const DEFAULT_PUNCTUATION: [char; 6] = ['.', ',', ':', '܆', '܇', '܀'];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizeConfig {
    /// Characters deleted by [`remove_punctuation`].
    pub punctuation: Vec<char>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
        }
    }
}

/// Read a whole UTF-8 document into memory.
pub fn read_document(path: &Path) -> Result<String, io::Error> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Replace `\n` and `\r` with spaces, then collapse every run of spaces into
/// one. Leading and trailing spaces are kept (the word index skips them).
pub fn remove_linebreaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

/// Delete every configured punctuation character.
pub fn remove_punctuation(text: &str, config: &NormalizeConfig) -> String {
    text.chars()
        .filter(|c| !config.punctuation.contains(c))
        .collect()
}

/// Line breaks first, then punctuation.
pub fn process(text: &str, config: &NormalizeConfig) -> String {
    let _span = debug_span!("process_text", text_len = text.len()).entered();
    let out = remove_punctuation(&remove_linebreaks(text), config);
    debug!(out_len = out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linebreaks_become_single_spaces() {
        assert_eq!(remove_linebreaks("ܐ\nܒ\r\nܓ"), "ܐ ܒ ܓ");
        assert_eq!(remove_linebreaks("ܐ    ܒ"), "ܐ ܒ");
        assert_eq!(remove_linebreaks("ܐ \n ܒ"), "ܐ ܒ");
        assert_eq!(remove_linebreaks(""), "");
    }

    #[test]
    fn linebreaks_keep_edges() {
        assert_eq!(remove_linebreaks("\nܐ\n"), " ܐ ");
    }

    #[test]
    fn tabs_are_not_separators() {
        assert_eq!(remove_linebreaks("ܐ\tܒ"), "ܐ\tܒ");
    }

    #[test]
    fn punctuation_removed() {
        let config = NormalizeConfig::default();
        assert_eq!(remove_punctuation("ܐ. ܒ, ܓ: ܕ܆ ܗ܇ ܘ܀", &config), "ܐ ܒ ܓ ܕ ܗ ܘ");
        assert_eq!(remove_punctuation("ܐ; ܒ", &config), "ܐ; ܒ");
    }

    #[test]
    fn custom_punctuation() {
        let config = NormalizeConfig {
            punctuation: vec![';'],
        };
        assert_eq!(remove_punctuation("ܐ; ܒ.", &config), "ܐ ܒ.");
    }

    #[test]
    fn process_pipeline() {
        let text = "ܐܒ ܐܒ܀\nܓ.\r\n";
        assert_eq!(process(text, &NormalizeConfig::default()), "ܐܒ ܐܒ ܓ ");
    }

    #[test]
    fn read_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "ܐܒ ܓ\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "ܐܒ ܓ\n");
    }

    #[test]
    fn read_document_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
