//! Character-level Unicode classification for Syriac text.

/// Eastern Syriac vowel marks, in the order the default settings list them:
/// pthaha, zqapha, zlama (horizontal), hbasa, rwaha, zlama (angular).
pub const EASTERN_VOWELS: [char; 6] = [
    '\u{0732}', '\u{0735}', '\u{0738}', '\u{073C}', '\u{073F}', '\u{0739}',
];

/// Syame, the two-dot plural marker. Syriac texts encode it with the generic
/// combining diaeresis rather than a script-specific codepoint.
pub const SYAME: char = '\u{0308}';

/// The four proclitic letters particle prefixes are built from: beth, dalath,
/// waw and lamadh.
pub const PROCLITICS: [char; 4] = ['\u{0712}', '\u{0715}', '\u{0718}', '\u{0720}'];

/// Check the full Syriac block (U+0700..U+074F).
pub fn is_syriac(c: char) -> bool {
    ('\u{0700}'..='\u{074F}').contains(&c)
}

/// Syriac letters proper (alaph U+0710 through taw U+072C, plus the
/// Persian/Sogdian additions U+072D..U+072F and U+074D..U+074F).
pub fn is_syriac_letter(c: char) -> bool {
    ('\u{0710}'..='\u{072F}').contains(&c) || ('\u{074D}'..='\u{074F}').contains(&c)
}

/// Syriac combining points (U+0730..U+074A). Includes both Eastern and
/// Western vowel marks, qushshaya/rukkakha and the Syriac-specific dots.
pub fn is_syriac_point(c: char) -> bool {
    ('\u{0730}'..='\u{074A}').contains(&c)
}

/// Syriac punctuation (U+0700..U+070D).
pub fn is_syriac_punctuation(c: char) -> bool {
    ('\u{0700}'..='\u{070D}').contains(&c)
}

pub fn is_eastern_vowel(c: char) -> bool {
    EASTERN_VOWELS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_syriac('ܐ'));
        assert!(is_syriac_letter('ܐ'));
        assert!(is_syriac_letter('ܬ'));
        assert!(!is_syriac_letter('\u{0732}'));
        assert!(is_syriac_point('\u{0732}'));
        assert!(is_syriac_punctuation('܀'));
        assert!(!is_syriac('a'));
        assert!(!is_syriac(SYAME));
    }

    #[test]
    fn test_eastern_vowels() {
        for v in EASTERN_VOWELS {
            assert!(is_eastern_vowel(v));
            assert!(is_syriac_point(v));
        }
        assert!(!is_eastern_vowel('ܐ'));
        assert!(!is_eastern_vowel(SYAME));
    }

    #[test]
    fn test_proclitics_are_letters() {
        assert!(PROCLITICS.iter().all(|&c| is_syriac_letter(c)));
    }
}
