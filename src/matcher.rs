// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary matching: every word occurrence in a subject, overlaps included.
//!
//! Built on an Aho-Corasick automaton with standard (non-leftmost) semantics
//! and overlapping iteration, so "cleaner" reports `c`, `cl`..., `clean`,
//! `cleaner`, `lean`, `leaner`, `er` and so on, each with its start offset.
//! The search needs all of them; a leftmost-first matcher would hide most of
//! the candidate segmentations.
//!
//! The 26 single letters are always part of the vocabulary, which makes every
//! ASCII-alphabetic subject segmentable (worst case: one letter per word).

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::LoadError;
use crate::types::RawMatch;

/// Immutable word automaton. Build once, share across requests.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    automaton: AhoCorasick,
    word_count: usize,
}

impl Vocabulary {
    /// Build from `words` plus the alphabet `a`-`z`.
    ///
    /// Words are trimmed and lowercased; blanks and duplicates are dropped.
    /// Matching is ASCII case-insensitive.
    pub fn new<I, S>(words: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: BTreeSet<String> = ('a'..='z').map(String::from).collect();
        patterns.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .filter(|w| !w.is_empty()),
        );

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&patterns)?;

        tracing::debug!(words = patterns.len(), "vocabulary built");

        Ok(Self {
            automaton,
            word_count: patterns.len(),
        })
    }

    /// Number of distinct words, alphabet included.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Never true: the alphabet is always present.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Every vocabulary occurrence in `subject`.
    ///
    /// The reported text is the subject's own slice, so its case is preserved.
    /// Order is the automaton's (by end offset); callers that care re-sort.
    pub fn find_matches(&self, subject: &str) -> Vec<RawMatch> {
        self.automaton
            .find_overlapping_iter(subject)
            .map(|m| RawMatch::new(&subject[m.start()..m.end()], m.start()))
            .collect()
    }
}
