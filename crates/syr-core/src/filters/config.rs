use serde::Deserialize;

use crate::unicode::{EASTERN_VOWELS, SYAME};

/// Particle candidates: every combination of the proclitics ܒ ܕ ܘ ܠ that
/// occurs as a prefix chain in the corpora this list was compiled for.
pub const DEFAULT_PARTICLES: [&str; 43] = [
    "ܒ", "ܒܕ", "ܒܕܒ", "ܒܕܒܕ", "ܒܕܠ", "ܒܕܠܕ", "ܒܠܒܕ", "ܒܠܕܒ", "ܕ", "ܕܒ", "ܕܒܕ", "ܕܒܕܒ",
    "ܕܒܕܠ", "ܕܒܠܕ", "ܕܠ", "ܕܠܒܕ", "ܕܠܕ", "ܕܠܕܒ", "ܕܠܕܠ", "ܘ", "ܘܒ", "ܘܒܕ", "ܘܒܕܒ",
    "ܘܒܕܠ", "ܘܒܠܕ", "ܘܕ", "ܘܕܒ", "ܘܕܒܕ", "ܘܕܠ", "ܘܕܠܕ", "ܘܠ", "ܘܠܒܕ", "ܘܠܕ", "ܘܠܕܒ",
    "ܘܠܕܠ", "ܠ", "ܠܒܕ", "ܠܒܕܠ", "ܠܕ", "ܠܕܒ", "ܠܕܒܕ", "ܠܕܠ", "ܠܕܠܕ",
];

/// Vowel marks that make a word count as vocalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocalizationConfig {
    /// Defaults to the six Eastern Syriac vowel marks.
    pub vowels: Vec<char>,
}

impl Default for VocalizationConfig {
    fn default() -> Self {
        Self {
            vowels: EASTERN_VOWELS.to_vec(),
        }
    }
}

/// Diacritic that marks a plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SyameConfig {
    /// Defaults to U+0308 COMBINING DIAERESIS.
    pub marker: char,
}

impl Default for SyameConfig {
    fn default() -> Self {
        Self { marker: SYAME }
    }
}

/// Ordered prefix list for particle-candidate extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParticleConfig {
    /// Defaults to [`DEFAULT_PARTICLES`].
    pub prefixes: Vec<String>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::PROCLITICS;

    #[test]
    fn default_particles_are_proclitic_chains() {
        assert_eq!(DEFAULT_PARTICLES.len(), 43);
        for p in DEFAULT_PARTICLES {
            assert!(!p.is_empty());
            assert!(p.chars().all(|c| PROCLITICS.contains(&c)), "{p}");
        }
    }

    #[test]
    fn default_particles_unique_and_sorted() {
        for pair in DEFAULT_PARTICLES.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(VocalizationConfig::default().vowels.len(), 6);
        assert_eq!(SyameConfig::default().marker, '\u{0308}');
        assert_eq!(ParticleConfig::default().prefixes[0], "ܒ");
    }
}
