use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use tracing::debug_span;

use super::FrequencyMap;

/// Accepted spellings for [`SortMode`], listed in error messages.
const ACCEPTED_MODES: &[&str] = &["alphabetic", "alefba", "frequency", "freq"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("invalid sort mode '{given}': must be one of {}", accepted.join(", "))]
    InvalidArgument {
        given: String,
        accepted: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending by unit, comparing codepoint sequences ("alefba" order).
    Alphabetic,
    /// Descending by count; equal counts fall back to alphabetic order.
    Frequency,
}

impl FromStr for SortMode {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetic" | "alefba" => Ok(SortMode::Alphabetic),
            "frequency" | "freq" => Ok(SortMode::Frequency),
            other => Err(OrderError::InvalidArgument {
                given: other.to_string(),
                accepted: ACCEPTED_MODES,
            }),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Alphabetic => f.write_str("alphabetic"),
            SortMode::Frequency => f.write_str("frequency"),
        }
    }
}

/// The entries of a [`FrequencyMap`] materialized in a defined order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedFrequencyMap {
    mode: SortMode,
    entries: Vec<(String, u64)>,
}

impl OrderedFrequencyMap {
    /// Order a map's entries. Never fails; use [`sort`] when the mode comes
    /// from a caller-supplied string.
    pub fn new(map: &FrequencyMap, mode: SortMode) -> Self {
        let _span = debug_span!("sort_frequencies", %mode, len = map.len()).entered();
        let mut entries: Vec<(String, u64)> =
            map.iter().map(|(k, v)| (k.to_string(), v)).collect();
        match mode {
            SortMode::Alphabetic => entries.sort_unstable_by(|a, b| a.0.cmp(&b.0)),
            // Keys are unique, so the secondary key makes the order total.
            SortMode::Frequency => {
                entries.sort_unstable_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)))
            }
        }
        Self { mode, entries }
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries (the `n` most frequent in frequency mode).
    pub fn top(&self, n: usize) -> &[(String, u64)] {
        &self.entries[..n.min(self.entries.len())]
    }
}

/// Sort `map` by the named mode.
///
/// Returns [`OrderError::InvalidArgument`] for an unrecognized mode before
/// any reordering happens. `map` is never modified.
pub fn sort(map: &FrequencyMap, mode: &str) -> Result<OrderedFrequencyMap, OrderError> {
    let mode: SortMode = mode.parse()?;
    Ok(OrderedFrequencyMap::new(map, mode))
}
