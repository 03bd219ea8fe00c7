// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how hashtags get sorted.
//!
//! Mean score first, highest wins. Ties go to the lexicographically larger
//! tag, which makes the order total and reproducible run to run.

use std::cmp::Ordering;

use crate::types::HashTag;

/// Compare two hashtags for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher mean word score ranks first)
/// 2. **Tag** - descending byte-wise comparison of the rendered tag
///
/// `Ordering::Less` means `a` ranks ahead of `b`.
///
/// # Example
///
/// ```ignore
/// // "AbC" and "ABc" both average 2.5; 'b' > 'B' so "AbC" comes first
/// assert_eq!(compare_hashtags(&abc_lower, &abc_upper), Ordering::Less);
/// ```
pub fn compare_hashtags(a: &HashTag, b: &HashTag) -> Ordering {
    match b.score().total_cmp(&a.score()) {
        Ordering::Equal => b.tag().cmp(&a.tag()),
        ord => ord,
    }
}

/// Does `a` rank strictly ahead of `b`?
#[inline]
pub fn ranks_ahead(a: &HashTag, b: &HashTag) -> bool {
    compare_hashtags(a, b) == Ordering::Less
}

/// Sort in place by ranking order.
pub fn sort_ranked(tags: &mut [HashTag]) {
    tags.sort_by(compare_hashtags);
}

/// Are `tags` in ranking order?
pub fn is_ranked(tags: &[HashTag]) -> bool {
    tags.windows(2)
        .all(|pair| compare_hashtags(&pair[0], &pair[1]) != Ordering::Greater)
}
