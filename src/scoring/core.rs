// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind word desirability.
//!
//! Length dominates. A word's length is squared, so one 4-letter word (16)
//! outscores any split of the same span into shorter pieces (at most 2×4 = 8
//! for two 2-letter words). Frequency adds a smaller boost on top so that,
//! among equal-length candidates, a common real word outranks a rare
//! substring.
//!
//! # Formula
//!
//! ```text
//! score = len(word)² × LENGTH_WEIGHT + (freq / 1_000_000) × FREQUENCY_WEIGHT
//! ```
//!
//! where `freq` is the word's count per million tokens in the frequency
//! table (0 when absent or when no table is loaded).
//!
//! # Constants
//!
//! | Constant           | Value | Why this value                                  |
//! |--------------------|-------|-------------------------------------------------|
//! | `LENGTH_WEIGHT`    | 1.0   | Baseline, length is the primary signal          |
//! | `FREQUENCY_WEIGHT` | 800.0 | "the" (~60k/M) adds ~48, rare words add ~0      |

use std::collections::HashMap;

use crate::utils::is_alphabetic_word;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Multiplier for the squared word length.
pub const LENGTH_WEIGHT: f64 = 1.0;

/// Multiplier for the per-token frequency (`freq / 1_000_000`).
pub const FREQUENCY_WEIGHT: f64 = 800.0;

/// Frequencies are stored as counts per this many tokens.
pub const FREQUENCY_SCALE: f64 = 1_000_000.0;

// =============================================================================
// FREQUENCY TABLE
// =============================================================================

/// Corpus frequencies keyed by lowercase word, counts per million tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `word`, keeping the maximum if the word repeats.
    ///
    /// Non-alphabetic words are ignored. Returns whether the word was kept.
    pub fn record(&mut self, word: &str, count: u64) -> bool {
        if !is_alphabetic_word(word) {
            return false;
        }
        let entry = self.counts.entry(word.to_ascii_lowercase()).or_insert(0);
        *entry = (*entry).max(count);
        true
    }

    /// Frequency for `word`, case-insensitively. Unknown words are 0.
    pub fn get(&self, word: &str) -> u64 {
        if let Some(&count) = self.counts.get(word) {
            return count;
        }
        self.counts
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.record(word.as_ref(), count);
        }
        table
    }
}

// =============================================================================
// WORD SCORE
// =============================================================================

/// Desirability of `word` as a standalone hashtag word.
///
/// Pure function of its arguments. A missing table contributes nothing.
pub fn word_score(word: &str, frequency: Option<&FrequencyTable>) -> f64 {
    let len = word.chars().count() as f64;
    let length_factor = len * len * LENGTH_WEIGHT;

    let freq = frequency.map_or(0, |table| table.get(word));
    let freq_factor = (freq as f64 / FREQUENCY_SCALE) * FREQUENCY_WEIGHT;

    length_factor + freq_factor
}
