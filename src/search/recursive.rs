//! Recursive reference search.
//!
//! The direct definition: the hashtags from `pos` are every match at `pos`
//! prepended to every hashtag from where that match ends. Memoized per
//! position, no ceiling, no pruning. Exponential output on adversarial input,
//! so it exists to check the iterative engine, not to serve requests.

use crate::index::StringMatches;
use crate::scoring::ranking::sort_ranked;
use crate::types::HashTag;

/// Every segmentation of `index.subject()[pos..]`, ranked.
///
/// At `pos == len` the only segmentation is the empty tag. Past the end, or
/// where the rest cannot be tiled, there are none.
pub fn compute_hashtags(index: &StringMatches, pos: usize) -> Vec<HashTag> {
    let mut memo: Vec<Option<Vec<HashTag>>> = vec![None; index.len() + 1];
    let mut results = suffixes_from(index, pos, &mut memo);
    sort_ranked(&mut results);
    results
}

fn suffixes_from(
    index: &StringMatches,
    pos: usize,
    memo: &mut Vec<Option<Vec<HashTag>>>,
) -> Vec<HashTag> {
    if pos > index.len() {
        return Vec::new();
    }
    if pos == index.len() {
        return vec![HashTag::empty()];
    }
    if let Some(cached) = &memo[pos] {
        return cached.clone();
    }

    let mut found = Vec::new();
    for m in index.at(pos) {
        for suffix in suffixes_from(index, m.end(), memo) {
            found.push(suffix.prepend_word(&m.text, m.score));
        }
    }

    memo[pos] = Some(found.clone());
    found
}
