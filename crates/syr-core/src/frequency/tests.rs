use proptest::prelude::*;

use super::*;

#[test]
fn word_frequencies_counts_repeats() {
    let map = word_frequencies("ܐܒ ܐܒ ܓ");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("ܐܒ"), Some(2));
    assert_eq!(map.get("ܓ"), Some(1));
    assert_eq!(map.total(), 3);
}

#[test]
fn word_frequencies_empty_text() {
    let map = word_frequencies("");
    assert!(map.is_empty());
    assert_eq!(map.total(), 0);
}

#[test]
fn word_frequencies_skips_empty_substrings() {
    let map = word_frequencies("  ܐܒ  ܓ ");
    assert!(!map.contains(""));
    assert_eq!(map.len(), 2);
    assert_eq!(map.total(), 2);
}

#[test]
fn word_frequencies_only_splits_on_space() {
    // Line breaks and tabs belong to the word until normalization removes them.
    let map = word_frequencies("ܐ\nܒ ܓ\tܕ");
    assert_eq!(map.get("ܐ\nܒ"), Some(1));
    assert_eq!(map.get("ܓ\tܕ"), Some(1));
}

#[test]
fn word_frequencies_keeps_diacritics_distinct() {
    let map = word_frequencies("ܡܠܐ ܡܲܠܐ ܡܠܐ");
    assert_eq!(map.get("ܡܠܐ"), Some(2));
    assert_eq!(map.get("ܡܲܠܐ"), Some(1));
}

#[test]
fn custom_separator() {
    let map = word_frequencies_with("ܐ|ܒ||ܐ", '|');
    assert_eq!(map.get("ܐ"), Some(2));
    assert_eq!(map.get("ܒ"), Some(1));
    assert_eq!(map.len(), 2);
}

#[test]
fn from_counts_drops_invalid_entries() {
    let map = FrequencyMap::from_counts([("ܐ", 2), ("", 5), ("ܒ", 0), ("ܐ", 1)]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("ܐ"), Some(3));
}

#[test]
fn sort_by_frequency() {
    let map = word_frequencies("ܐܒ ܐܒ ܓ");
    let sorted = sort(&map, "frequency").unwrap();
    assert_eq!(
        sorted.entries(),
        &[("ܐܒ".to_string(), 2), ("ܓ".to_string(), 1)]
    );
    assert_eq!(sorted.mode(), SortMode::Frequency);
}

#[test]
fn sort_frequency_ties_fall_back_to_alphabetic() {
    let map = FrequencyMap::from_counts([("ܓ", 1), ("ܐ", 1), ("ܒ", 1), ("ܕ", 4)]);
    let sorted = sort(&map, "freq").unwrap();
    let keys: Vec<&str> = sorted.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["ܕ", "ܐ", "ܒ", "ܓ"]);
}

#[test]
fn sort_alphabetic_by_codepoint() {
    // Vowel marks sort after every consonant, and a bare stem sorts before
    // its vocalized forms.
    let map = FrequencyMap::from_counts([("ܡܲܠܐ", 1), ("ܡܠܐ", 5), ("ܐ", 2), ("ܬ", 1)]);
    let sorted = sort(&map, "alphabetic").unwrap();
    let keys: Vec<&str> = sorted.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["ܐ", "ܡܠܐ", "ܡܲܠܐ", "ܬ"]);
}

#[test]
fn sort_alefba_alias() {
    let map = FrequencyMap::from_counts([("ܒ", 1), ("ܐ", 1)]);
    let a = sort(&map, "alefba").unwrap();
    let b = sort(&map, "alphabetic").unwrap();
    assert_eq!(a, b);
}

#[test]
fn sort_invalid_mode() {
    let map = word_frequencies("ܐܒ ܐܒ ܓ");
    let before = map.clone();
    let err = sort(&map, "bogus").unwrap_err();
    assert!(matches!(err, OrderError::InvalidArgument { ref given, .. } if given == "bogus"));
    let msg = err.to_string();
    assert!(msg.contains("bogus"));
    assert!(msg.contains("alphabetic"));
    assert!(msg.contains("frequency"));
    assert_eq!(map, before);
}

#[test]
fn sort_empty_map() {
    let sorted = sort(&FrequencyMap::new(), "frequency").unwrap();
    assert!(sorted.is_empty());
    assert!(sorted.top(3).is_empty());
}

#[test]
fn top_truncates() {
    let map = FrequencyMap::from_counts([("ܐ", 3), ("ܒ", 2), ("ܓ", 1)]);
    let sorted = OrderedFrequencyMap::new(&map, SortMode::Frequency);
    assert_eq!(sorted.top(2).len(), 2);
    assert_eq!(sorted.top(2)[0].0, "ܐ");
    assert_eq!(sorted.top(10).len(), 3);
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(' '),
            1 => Just('\n'),
            3 => Just('ܐ'),
            3 => Just('ܒ'),
            2 => Just('ܓ'),
            2 => Just('\u{0732}'),
            1 => Just('\u{0308}'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn total_equals_token_count(text in arb_text()) {
        let map = word_frequencies(&text);
        let tokens = text.split(' ').filter(|w| !w.is_empty()).count() as u64;
        prop_assert_eq!(map.total(), tokens);
        prop_assert!(!map.contains(""));
        prop_assert!(map.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn alphabetic_keys_non_decreasing(text in arb_text()) {
        let sorted = OrderedFrequencyMap::new(&word_frequencies(&text), SortMode::Alphabetic);
        for pair in sorted.entries().windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn frequency_counts_non_increasing(text in arb_text()) {
        let map = word_frequencies(&text);
        let sorted = OrderedFrequencyMap::new(&map, SortMode::Frequency);
        prop_assert_eq!(sorted.len(), map.len());
        for pair in sorted.entries().windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}
