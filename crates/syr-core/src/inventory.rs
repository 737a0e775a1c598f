//! Character inventory: occurrence counts for every distinct character.
//!
//! Mostly a quality-control tool. Comparing the inventory before and after
//! transliteration shows which characters the table did not cover.

use tracing::{debug, debug_span};

use crate::frequency::FrequencyMap;
use crate::unicode;

/// Count every character in `text`. No normalization or case folding.
pub fn char_frequencies(text: &str) -> FrequencyMap {
    let _span = debug_span!("char_frequencies", text_len = text.len()).entered();
    let mut map = FrequencyMap::new();
    let mut buf = [0u8; 4];
    for c in text.chars() {
        map.record(c.encode_utf8(&mut buf));
    }
    debug!(distinct = map.len());
    map
}

/// Coarse character classes used to summarize an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Letter,
    Vowel,
    Syame,
    /// Any other Syriac combining point (qushshaya, rukkakha, Western vowels).
    Point,
    Punctuation,
    Whitespace,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if unicode::is_syriac_letter(c) {
            CharClass::Letter
        } else if unicode::is_eastern_vowel(c) {
            CharClass::Vowel
        } else if c == unicode::SYAME {
            CharClass::Syame
        } else if unicode::is_syriac_point(c) {
            CharClass::Point
        } else if unicode::is_syriac_punctuation(c) || c.is_ascii_punctuation() {
            CharClass::Punctuation
        } else if c.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Letter => "letters",
            CharClass::Vowel => "vowels",
            CharClass::Syame => "syame",
            CharClass::Point => "other points",
            CharClass::Punctuation => "punctuation",
            CharClass::Whitespace => "whitespace",
            CharClass::Other => "other",
        }
    }
}

/// Sum an inventory's counts per [`CharClass`]. Classes with no occurrences
/// are omitted; the result is ordered by class.
pub fn class_totals(inventory: &FrequencyMap) -> Vec<(CharClass, u64)> {
    let mut totals: Vec<(CharClass, u64)> = Vec::new();
    for (unit, count) in inventory {
        let Some(c) = unit.chars().next() else {
            continue;
        };
        let class = CharClass::of(c);
        match totals.iter_mut().find(|(k, _)| *k == class) {
            Some((_, total)) => *total += count,
            None => totals.push((class, count)),
        }
    }
    totals.sort_by_key(|(class, _)| *class);
    totals
}
