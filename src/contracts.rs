//! Runtime contracts for the segmentation search.
//!
//! Debug-mode assertions for the properties every stage must preserve. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the property tests in `tests/property/` exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function               | Property                                   |
//! |---------------------------------|--------------------------------------------|
//! | `check_match_index_well_formed` | Buckets aligned, in bounds, score-sorted   |
//! | `check_hashtag_well_formed`     | `words.len() == scores.len()`, no empties  |
//! | `check_covers_subject`          | `lowercase(tag) == lowercase(subject)`     |
//! | `check_ranked`                  | Score desc, then tag desc                  |
//!
//! # Usage
//!
//! ```ignore
//! use majuscule::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_ranked(&results);
//!
//! // In release builds, this is a no-op
//! ```

use crate::index::StringMatches;
use crate::scoring::ranking::compare_hashtags;
use crate::types::HashTag;
use std::cmp::Ordering;

// ============================================================================
// MATCH INDEX CONTRACTS
// ============================================================================

/// Check that a match index is well-formed.
///
/// # Panics (debug builds only)
/// Panics if a bucket is misplaced, a match leaves the subject, or a bucket
/// is not sorted by descending score.
#[inline]
pub fn check_match_index_well_formed(index: &StringMatches) {
    debug_assert_eq!(
        index.buckets().len(),
        index.len(),
        "Contract violation: one bucket per subject byte"
    );

    for (pos, bucket) in index.buckets().iter().enumerate() {
        for m in bucket {
            debug_assert!(
                m.pos == pos,
                "Contract violation: match '{}' at pos {} filed under bucket {}",
                m.text,
                m.pos,
                pos
            );
            debug_assert!(
                !m.text.is_empty() && m.end() <= index.len(),
                "Contract violation: match '{}' at {} leaves subject of length {}",
                m.text,
                m.pos,
                index.len()
            );
        }
        for (i, pair) in bucket.windows(2).enumerate() {
            debug_assert!(
                pair[0].score >= pair[1].score,
                "Contract violation: bucket {} not sorted at {}: {} < {}",
                pos,
                i,
                pair[0].score,
                pair[1].score
            );
        }
    }
}

// ============================================================================
// HASHTAG CONTRACTS
// ============================================================================

/// Check that a hashtag has aligned words and scores and no empty words.
#[inline]
pub fn check_hashtag_well_formed(tag: &HashTag) {
    debug_assert_eq!(
        tag.word_count(),
        tag.scores().len(),
        "Contract violation: words and scores differ in length for '{}'",
        tag.tag()
    );
    debug_assert!(
        tag.words().all(|w| !w.is_empty()),
        "Contract violation: empty word in '{}'",
        tag.tag()
    );
}

/// Check that a complete hashtag spells out the subject.
///
/// Comparison is case-insensitive: capitalization is the only thing the
/// search is allowed to change. Characters are lowercased one at a time, so
/// context rules like final sigma do not apply.
#[inline]
pub fn check_covers_subject(tag: &HashTag, subject: &str) {
    debug_assert!(
        same_lowercase(&tag.tag(), subject),
        "Contract violation: '{}' does not cover subject '{}'",
        tag.tag(),
        subject
    );
}

/// Char-wise lowercase equality.
pub fn same_lowercase(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that results are in ranking order.
#[inline]
pub fn check_ranked(tags: &[HashTag]) {
    for (i, pair) in tags.windows(2).enumerate() {
        debug_assert!(
            compare_hashtags(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: results not ranked at {}: '{}' ({}) before '{}' ({})",
            i,
            pair[0].tag(),
            pair[0].score(),
            pair[1].tag(),
            pair[1].score()
        );
    }
}
