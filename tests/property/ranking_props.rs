//! Ranking properties: the comparator is a total order and the sorted-insert
//! accumulator agrees with a full sort.

use std::cmp::Ordering;

use majuscule::scoring::ranking::{compare_hashtags, is_ranked, sort_ranked};
use majuscule::search::HashTagAccumulator;
use majuscule::HashTag;
use proptest::prelude::*;

/// Small word pool so ties on both score and tag actually happen.
fn hashtag_strategy() -> impl Strategy<Value = HashTag> {
    let word = prop::sample::select(vec!["A", "B", "Ab", "Ba", "Abc", "C"]);
    let score = prop::sample::select(vec![1.0, 2.5, 4.0, 9.0]);
    prop::collection::vec((word, score), 1..5).prop_map(|parts| {
        let (words, scores): (Vec<&str>, Vec<f64>) = parts.into_iter().unzip();
        HashTag::from_parts(&words, &scores).unwrap()
    })
}

fn key(tag: &HashTag) -> (String, u64) {
    (tag.tag(), tag.score().to_bits())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Inserting one by one yields the same order as sorting everything at once.
    #[test]
    fn prop_accumulator_matches_full_sort(tags in prop::collection::vec(hashtag_strategy(), 0..40)) {
        let mut acc = HashTagAccumulator::new();
        for tag in &tags {
            acc.insert_sorted(tag.clone());
        }
        let accumulated: Vec<_> = acc.into_ranked().iter().map(key).collect();

        let mut sorted = tags.clone();
        sort_ranked(&mut sorted);
        let expected: Vec<_> = sorted.iter().map(key).collect();

        prop_assert_eq!(accumulated, expected);
    }

    /// Antisymmetry: swapping arguments reverses the ordering.
    #[test]
    fn prop_compare_antisymmetric(a in hashtag_strategy(), b in hashtag_strategy()) {
        prop_assert_eq!(compare_hashtags(&a, &b), compare_hashtags(&b, &a).reverse());
    }

    /// Transitivity over triples.
    #[test]
    fn prop_compare_transitive(
        a in hashtag_strategy(),
        b in hashtag_strategy(),
        c in hashtag_strategy(),
    ) {
        if compare_hashtags(&a, &b) != Ordering::Greater
            && compare_hashtags(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_hashtags(&a, &c), Ordering::Greater);
        }
    }

    /// Equal under the comparator means same tag and same score.
    #[test]
    fn prop_compare_equal_means_same_key(a in hashtag_strategy(), b in hashtag_strategy()) {
        if compare_hashtags(&a, &b) == Ordering::Equal {
            prop_assert_eq!(key(&a), key(&b));
        }
    }

    /// Sorted output satisfies the ranking predicate.
    #[test]
    fn prop_sort_ranked_is_ranked(mut tags in prop::collection::vec(hashtag_strategy(), 0..30)) {
        sort_ranked(&mut tags);
        prop_assert!(is_ranked(&tags));
        for pair in tags.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }
    }

    /// The pruning threshold only ever moves toward better tags.
    #[test]
    fn prop_threshold_never_worsens(
        tags in prop::collection::vec(hashtag_strategy(), 1..40),
        k in 1usize..5,
    ) {
        let mut acc = HashTagAccumulator::new();
        let mut previous: Option<HashTag> = None;
        for tag in tags {
            acc.insert_sorted(tag);
            if let Some(current) = acc.threshold(k) {
                if let Some(prev) = &previous {
                    prop_assert_ne!(compare_hashtags(current, prev), Ordering::Greater);
                }
                previous = Some(current.clone());
            }
        }
    }
}
