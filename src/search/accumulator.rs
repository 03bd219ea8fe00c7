// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked accumulation of complete hashtags.
//!
//! Every complete segmentation the search finds lands here. The list stays
//! sorted by `compare_hashtags()` at all times, so there is no final sort and
//! the pruning threshold is a plain index lookup.
//!
//! **Invariant**: `tags` is in ranking order after every insertion.
//!
//! **Verified by**:
//! - `prop_accumulator_matches_full_sort` (tests/property/ranking_props.rs)
//! - `contracts::check_ranked` in debug builds

use crate::contracts::check_ranked;
use crate::scoring::ranking::ranks_ahead;
use crate::types::HashTag;

/// Sorted-insert list of complete hashtags, best first.
///
/// The list is never truncated while the search runs. Callers cut it down to
/// the number of results they want after [`HashTagAccumulator::into_ranked`].
#[derive(Debug, Clone, Default)]
pub struct HashTagAccumulator {
    tags: Vec<HashTag>,
}

impl HashTagAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `tag` at its rank.
    ///
    /// Binary search for the first entry that does not rank strictly ahead of
    /// `tag`, then shift the tail. Equal tags land before existing equals.
    /// Returns the insertion index.
    pub fn insert_sorted(&mut self, tag: HashTag) -> usize {
        let index = self.tags.partition_point(|existing| ranks_ahead(existing, &tag));
        self.tags.insert(index, tag);
        index
    }

    /// The tag a newcomer must not rank behind to still make the top `max_results`.
    ///
    /// `None` until the list holds more than `max_results` entries, and always
    /// `None` for `max_results == 0` (unbounded). The value never decreases as
    /// more tags are inserted.
    pub fn threshold(&self, max_results: usize) -> Option<&HashTag> {
        if max_results == 0 || self.tags.len() <= max_results {
            return None;
        }
        self.tags.get(max_results - 1)
    }

    /// Could `tag` still end up in the top `max_results`?
    pub fn can_enter(&self, tag: &HashTag, max_results: usize) -> bool {
        match self.threshold(max_results) {
            Some(cutoff) => !ranks_ahead(cutoff, tag),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Current results, best first.
    pub fn as_slice(&self) -> &[HashTag] {
        &self.tags
    }

    /// Consume into the ranked result list.
    pub fn into_ranked(self) -> Vec<HashTag> {
        check_ranked(&self.tags);
        self.tags
    }
}
