// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for segmentation coverage.
//!
//! Every suggested hashtag must spell the subject back exactly once, and the
//! bounded iterative search must agree with exhaustive recursion on what it
//! returns.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use majuscule::scoring::ranking::is_ranked;
use majuscule::search::compute_hashtags;
use majuscule::{suggest_hashtags, HashTag, SearchLimits, StringMatches, Vocabulary};

/// Word lists, sorted, so two searches can be compared as multisets.
fn segmentations(tags: &[HashTag]) -> Vec<Vec<String>> {
    let mut words: Vec<Vec<String>> = tags
        .iter()
        .map(|t| t.words().map(str::to_string).collect())
        .collect();
    words.sort();
    words
}

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    subject: String,
    top: u8,
}

fuzz_target!(|input: Input| {
    // Short subjects keep exhaustive enumeration tractable
    let subject: String = input
        .subject
        .chars()
        .filter(char::is_ascii)
        .take(12)
        .collect();
    if subject.is_empty() {
        return;
    }
    let words: Vec<String> = input
        .words
        .into_iter()
        .take(16)
        .map(|w| w.chars().take(6).collect())
        .collect();

    let Ok(vocabulary) = Vocabulary::new(&words) else {
        return;
    };
    let index = StringMatches::build(subject.as_str(), vocabulary.find_matches(&subject), None);

    let all = suggest_hashtags(&index, &SearchLimits::unbounded());
    assert!(is_ranked(&all));
    for tag in &all {
        assert!(
            tag.tag().eq_ignore_ascii_case(&subject),
            "{:?} does not spell {:?}",
            tag.tag(),
            subject
        );
    }

    // INVARIANT: no segmentation is reported twice
    let mut tags = segmentations(&all);
    let before = tags.len();
    tags.dedup();
    assert_eq!(before, tags.len(), "duplicate segmentation for {:?}", subject);

    // INVARIANT: the iterative search finds what recursion finds
    assert_eq!(tags, segmentations(&compute_hashtags(&index, 0)));

    // INVARIANT: top-k is a prefix of the full ranking
    let k = usize::from(input.top % 8) + 1;
    let limits = SearchLimits {
        max_results: k,
        result_ceiling: usize::MAX,
    };
    let mut top = suggest_hashtags(&index, &limits);
    top.truncate(k);
    assert_eq!(top.len(), all.len().min(k));
    for (a, b) in top.iter().zip(&all) {
        assert_eq!(a.tag(), b.tag());
        assert_eq!(a.score().to_bits(), b.score().to_bits());
    }
});
