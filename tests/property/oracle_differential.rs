//! Differential testing: compare the iterative engine against oracles.
//!
//! Each optimized piece is tested against a simple, obviously-correct
//! reference. If they disagree, the oracle is right.

use super::common::{string_matches, tag_multiset, unbounded, SMALL_VOCABULARY};
use super::oracles::{oracle_mean_score, oracle_rank, oracle_segmentations, oracle_tag, oracle_tag_multiset};
use majuscule::{compute_hashtags, suggest_hashtags, SearchLimits};
use proptest::prelude::*;

fn subject_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,12}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[abc]{2,4}").unwrap(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Iterative engine and recursive reference find the same segmentations.
    #[test]
    fn diff_iterative_vs_recursive(subject in subject_strategy()) {
        let index = string_matches(&subject, SMALL_VOCABULARY);
        let iterative = suggest_hashtags(&index, &unbounded());
        let recursive = compute_hashtags(&index, 0);

        prop_assert_eq!(
            tag_multiset(&iterative),
            tag_multiset(&recursive),
            "engines disagree on {:?}",
            subject
        );
    }

    /// Iterative engine matches brute force over every cut point.
    #[test]
    fn diff_iterative_vs_brute_force(subject in subject_strategy(), words in vocabulary_strategy()) {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        let index = string_matches(&subject, &words);
        let iterative = suggest_hashtags(&index, &unbounded());

        prop_assert_eq!(
            tag_multiset(&iterative),
            oracle_tag_multiset(&subject, &words),
            "brute force disagrees on {:?} with {:?}",
            subject,
            words
        );
    }

    /// Full ranked output, scores included, matches the oracle ranking.
    #[test]
    fn diff_ranked_output_vs_oracle(subject in subject_strategy()) {
        let index = string_matches(&subject, SMALL_VOCABULARY);
        let engine: Vec<(String, f64)> = suggest_hashtags(&index, &unbounded())
            .iter()
            .map(|t| (t.tag(), t.score()))
            .collect();
        let oracle = oracle_rank(
            oracle_segmentations(&subject, SMALL_VOCABULARY)
                .iter()
                .map(|pieces| (oracle_tag(pieces), oracle_mean_score(pieces)))
                .collect(),
        );

        prop_assert_eq!(engine.len(), oracle.len());
        for ((tag, score), (oracle_tag, oracle_score)) in engine.iter().zip(&oracle) {
            prop_assert_eq!(tag, oracle_tag);
            prop_assert!((score - oracle_score).abs() < 1e-9);
        }
    }

    /// Top-k under pruning equals the first k of the unbounded run.
    #[test]
    fn diff_bounded_vs_unbounded(subject in subject_strategy(), k in 1usize..6) {
        let index = string_matches(&subject, SMALL_VOCABULARY);
        let all = suggest_hashtags(&index, &unbounded());
        let top = suggest_hashtags(
            &index,
            &SearchLimits { max_results: k, result_ceiling: usize::MAX },
        );

        let n = k.min(all.len());
        prop_assert!(top.len() >= n);
        for (a, b) in top[..n].iter().zip(&all[..n]) {
            prop_assert_eq!(a.tag(), b.tag());
            prop_assert_eq!(a.score().to_bits(), b.score().to_bits());
        }
    }
}
