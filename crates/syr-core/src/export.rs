//! Flat-file export: one `key,value` line per entry.
//!
//! No header, no quoting. Keys that contain a comma or a line break cannot be
//! read back unambiguously; [`parse_pairs`] splits on the first comma, so
//! only the value side may contain further commas.

use std::fmt::{Display, Write as _};
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::frequency::FrequencyMap;

pub const FIELD_SEPARATOR: char = ',';

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Render pairs as `key,value` lines, each terminated by `\n`.
pub fn to_csv<K, V, I>(pairs: I) -> String
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{key}{FIELD_SEPARATOR}{value}");
    }
    out
}

/// Write pairs to `path` in `key,value` format.
pub fn write_pairs<K, V, I>(path: &Path, pairs: I) -> Result<(), ExportError>
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let body = to_csv(pairs);
    write_atomic(path, body.as_bytes())?;
    debug!(path = %path.display(), bytes = body.len(), "wrote pairs");
    Ok(())
}

/// Export the current state of a text.
pub fn save_text(path: &Path, text: &str) -> Result<(), ExportError> {
    write_atomic(path, text.as_bytes())?;
    debug!(path = %path.display(), bytes = text.len(), "wrote text");
    Ok(())
}

/// Atomic write: write to a fresh temp file in the target directory, then
/// rename it over `path`. The temp name never collides with existing files.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Split each non-empty line on its first comma.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, ExportError> {
    let mut pairs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(FIELD_SEPARATOR) else {
            return Err(ExportError::Parse {
                line: i + 1,
                reason: "missing separator".to_string(),
            });
        };
        pairs.push((key.to_string(), value.to_string()));
    }
    Ok(pairs)
}

/// Rebuild a [`FrequencyMap`] from exported `unit,count` lines.
pub fn parse_frequency_csv(text: &str) -> Result<FrequencyMap, ExportError> {
    let mut counts = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let parse_err = |reason: String| ExportError::Parse {
            line: i + 1,
            reason,
        };
        let (unit, count) = line
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| parse_err("missing separator".to_string()))?;
        if unit.is_empty() {
            return Err(parse_err("empty key".to_string()));
        }
        let count: u64 = count
            .parse()
            .map_err(|e| parse_err(format!("invalid count {count:?}: {e}")))?;
        if count == 0 {
            return Err(parse_err("count must be positive".to_string()));
        }
        counts.push((unit.to_string(), count));
    }
    Ok(FrequencyMap::from_counts(counts))
}

/// Read a file written by [`write_pairs`] back into a [`FrequencyMap`].
pub fn read_frequency_csv(path: &Path) -> Result<FrequencyMap, ExportError> {
    let text = fs::read_to_string(path)?;
    parse_frequency_csv(&text)
}
