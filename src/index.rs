//! Match index construction.
//!
//! Groups the matcher's raw hits by start position and orders each position's
//! candidates by descending score, so the search explores the most salient
//! word at a position first.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ONE_BUCKET_PER_BYTE**: `matches.len() == subject.len()`; positions
//!    without candidates hold an empty list.
//! 2. **BUCKET_POSITION**: every match in bucket `i` has `pos == i`.
//! 3. **MATCH_IN_BOUNDS**: every match is non-empty and ends at or before
//!    `subject.len()`.
//! 4. **BUCKET_SORTED**: scores are non-increasing within a bucket. Ties keep
//!    the order the matcher reported them in (stable sort).
//!
//! # Offsets
//!
//! Positions are **byte offsets**, the same unit the matcher reports. A
//! vocabulary of valid UTF-8 words can only match on character boundaries,
//! so slicing the subject at any match span is always safe.

use crate::contracts::check_match_index_well_formed;
use crate::scoring::{word_score, FrequencyTable};
use crate::types::{Match, RawMatch};

/// The per-request index of candidate words: subject plus matches by position.
///
/// Immutable once built. The search keeps its memo cache on the side, so a
/// shared `&StringMatches` is all any search needs.
#[derive(Debug, Clone, PartialEq)]
pub struct StringMatches {
    subject: String,
    matches: Vec<Vec<Match>>,
}

impl StringMatches {
    /// Build the index from unscored matcher output.
    ///
    /// Each raw match is scored with [`word_score`] against `frequency`. Raw
    /// matches that are empty or run past the end of `subject` are dropped.
    pub fn build(
        subject: impl Into<String>,
        raw_matches: impl IntoIterator<Item = RawMatch>,
        frequency: Option<&FrequencyTable>,
    ) -> Self {
        let subject = subject.into();
        let mut buckets: Vec<Vec<Match>> = vec![Vec::new(); subject.len()];

        for raw in raw_matches {
            if !is_valid_span(&subject, &raw.text, raw.pos) {
                tracing::warn!(
                    pos = raw.pos,
                    word = %raw.text,
                    subject_len = subject.len(),
                    "dropping match outside subject"
                );
                continue;
            }
            let score = word_score(&raw.text, frequency);
            tracing::trace!(pos = raw.pos, word = %raw.text, score, "match");
            buckets[raw.pos].push(Match {
                text: raw.text,
                pos: raw.pos,
                score,
            });
        }

        Self::new(subject, buckets)
    }

    /// Build the index from already-scored buckets.
    ///
    /// `buckets` is resized to `subject.len()`; each bucket is stable-sorted
    /// by descending score. Matches whose `pos` disagrees with their bucket or
    /// whose span leaves the subject are dropped.
    pub fn new(subject: impl Into<String>, mut buckets: Vec<Vec<Match>>) -> Self {
        let subject = subject.into();
        buckets.resize_with(subject.len(), Vec::new);

        for (pos, bucket) in buckets.iter_mut().enumerate() {
            bucket.retain(|m| m.pos == pos && is_valid_span(&subject, &m.text, m.pos));
            bucket.sort_by(|a, b| b.score.total_cmp(&a.score));
        }

        let index = Self {
            subject,
            matches: buckets,
        };
        check_match_index_well_formed(&index);
        index
    }

    /// The string being segmented.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Subject length in bytes.
    pub fn len(&self) -> usize {
        self.subject.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    /// Candidates starting at `pos`, best first. Empty past the end.
    pub fn at(&self, pos: usize) -> &[Match] {
        self.matches.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All buckets, indexed by position.
    pub fn buckets(&self) -> &[Vec<Match>] {
        &self.matches
    }

    /// Every match, position by position.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().flatten()
    }

    /// Total number of matches across all positions.
    pub fn match_count(&self) -> usize {
        self.matches.iter().map(Vec::len).sum()
    }
}

fn is_valid_span(subject: &str, text: &str, pos: usize) -> bool {
    !text.is_empty() && pos.checked_add(text.len()).is_some_and(|end| end <= subject.len())
}
