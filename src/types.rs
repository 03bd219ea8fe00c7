// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a segmentation search.
//!
//! A subject string gets matched against the vocabulary, each match gets a
//! score, and the search stitches matches together into `HashTag`s.
//!
//! | Rust Type   | Purpose                                              |
//! |-------------|------------------------------------------------------|
//! | `RawMatch`  | Unscored `(text, pos)` pair straight from the matcher |
//! | `Match`     | Scored candidate word at a position                  |
//! | `HashTag`   | Capitalized, scored (partial) segmentation           |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Match**: `!text.is_empty() ∧ pos + text.len() ≤ subject.len()`.
//!   Every candidate is a real, non-empty slice of the subject.
//!
//! - **HashTag**: `words.len() = scores.len()` and every word is non-empty.
//!   Builders return fresh values and never touch the receiver, so a suffix
//!   tag can be shared by any number of prefixes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::utils::capitalize;

// =============================================================================
// MATCHES
// =============================================================================

/// An unscored vocabulary hit: `text` occurs in the subject at byte offset `pos`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMatch {
    pub text: String,
    pub pos: usize,
}

impl RawMatch {
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// A candidate word occurrence with its desirability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched substring, exactly as it appears in the subject.
    pub text: String,
    /// Byte offset where the word begins.
    pub pos: usize,
    /// Higher is more desirable as a standalone word.
    pub score: f64,
}

impl Match {
    pub fn new(text: impl Into<String>, pos: usize, score: f64) -> Self {
        Self {
            text: text.into(),
            pos,
            score,
        }
    }

    /// Byte offset one past the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.pos + self.text.len()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {:.6}", self.text, self.pos, self.score)
    }
}

// =============================================================================
// HASHTAGS
// =============================================================================

/// A (possibly partial) segmentation rendered as capitalized words.
///
/// Values are immutable. `append_word`, `prepend_word` and
/// `append_word_with_suffix` all build a new tag. Words are `Arc<str>`, so
/// copying a suffix into a longer tag costs a refcount bump per word rather
/// than a string allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashTag {
    words: Vec<Arc<str>>,
    scores: Vec<f64>,
}

impl HashTag {
    /// The empty segmentation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tag from already-capitalized words.
    ///
    /// Returns `None` when the lengths differ or a word is empty.
    pub fn from_parts<S: AsRef<str>>(words: &[S], scores: &[f64]) -> Option<Self> {
        if words.len() != scores.len() || words.iter().any(|w| w.as_ref().is_empty()) {
            return None;
        }
        Some(Self {
            words: words.iter().map(|w| Arc::from(w.as_ref())).collect(),
            scores: scores.to_vec(),
        })
    }

    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Concatenation of all words.
    pub fn tag(&self) -> String {
        self.words.concat()
    }

    /// Mean of the per-word scores.
    ///
    /// The empty tag scores `NEG_INFINITY` so it ranks behind everything.
    pub fn score(&self) -> f64 {
        if self.scores.is_empty() {
            return f64::NEG_INFINITY;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    /// `self` followed by `word` (capitalized).
    pub fn append_word(&self, word: &str, score: f64) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend(self.words.iter().cloned());
        words.push(Arc::from(capitalize(word)));

        let mut scores = Vec::with_capacity(self.scores.len() + 1);
        scores.extend_from_slice(&self.scores);
        scores.push(score);

        Self { words, scores }
    }

    /// `word` (capitalized) followed by `self`.
    pub fn prepend_word(&self, word: &str, score: f64) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.push(Arc::from(capitalize(word)));
        words.extend(self.words.iter().cloned());

        let mut scores = Vec::with_capacity(self.scores.len() + 1);
        scores.push(score);
        scores.extend_from_slice(&self.scores);

        Self { words, scores }
    }

    /// `self`, then `word` (capitalized), then every word of `suffix`.
    pub fn append_word_with_suffix(&self, word: &str, score: f64, suffix: &HashTag) -> Self {
        let len = self.words.len() + 1 + suffix.words.len();

        let mut words = Vec::with_capacity(len);
        words.extend(self.words.iter().cloned());
        words.push(Arc::from(capitalize(word)));
        words.extend(suffix.words.iter().cloned());

        let mut scores = Vec::with_capacity(len);
        scores.extend_from_slice(&self.scores);
        scores.push(score);
        scores.extend_from_slice(&suffix.scores);

        Self { words, scores }
    }
}

impl fmt::Display for HashTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores: Vec<String> = self.scores.iter().map(|s| format!("{:.6}", s)).collect();
        write!(
            f,
            "{} ({}) [{}]",
            self.tag(),
            self.word_count(),
            scores.join(",")
        )
    }
}
