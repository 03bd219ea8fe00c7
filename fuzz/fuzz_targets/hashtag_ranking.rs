// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for hashtag ranking.
//!
//! Sorted-insert accumulation must produce the same order as a full sort,
//! whatever scores the fuzzer invents (NaN and infinities included).

#![no_main]

use libfuzzer_sys::fuzz_target;
use majuscule::scoring::ranking::{compare_hashtags, is_ranked, sort_ranked};
use majuscule::search::HashTagAccumulator;
use majuscule::HashTag;
use std::cmp::Ordering;

fuzz_target!(|parts: Vec<Vec<(String, f64)>>| {
    let tags: Vec<HashTag> = parts
        .into_iter()
        .take(64)
        .filter_map(|words| {
            let (words, scores): (Vec<String>, Vec<f64>) = words.into_iter().take(6).unzip();
            HashTag::from_parts(&words, &scores)
        })
        .collect();

    let mut acc = HashTagAccumulator::new();
    for tag in &tags {
        acc.insert_sorted(tag.clone());
    }
    let accumulated = acc.into_ranked();
    assert!(is_ranked(&accumulated));

    let mut sorted = tags;
    sort_ranked(&mut sorted);
    assert_eq!(accumulated.len(), sorted.len());
    for (a, b) in accumulated.iter().zip(&sorted) {
        assert_eq!(compare_hashtags(a, b), Ordering::Equal);
    }
});
