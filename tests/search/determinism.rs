//! Determinism: same input, same ordered output, whoever asks.

use std::sync::Arc;

use super::common::{string_matches, tag_strings, unbounded, vocabulary, ENGLISH_WORDS};
use majuscule::{suggest_hashtags, SearchLimits, Suggester};

#[test]
fn repeated_runs_agree() {
    let index = string_matches("thisisatest", ENGLISH_WORDS);
    let first = tag_strings(&suggest_hashtags(&index, &unbounded()));
    for _ in 0..5 {
        assert_eq!(tag_strings(&suggest_hashtags(&index, &unbounded())), first);
    }
}

#[test]
fn rebuilt_index_agrees() {
    let a = string_matches("hashtagsunday", ENGLISH_WORDS);
    let b = string_matches("hashtagsunday", ENGLISH_WORDS);
    assert_eq!(a, b);
    assert_eq!(
        tag_strings(&suggest_hashtags(&a, &SearchLimits::default())),
        tag_strings(&suggest_hashtags(&b, &SearchLimits::default()))
    );
}

#[test]
fn vocabulary_order_does_not_matter() {
    let mut reversed: Vec<&str> = ENGLISH_WORDS.to_vec();
    reversed.reverse();
    assert_eq!(
        tag_strings(&suggest_hashtags(&string_matches("cleanerworld", ENGLISH_WORDS), &unbounded())),
        tag_strings(&suggest_hashtags(&string_matches("cleanerworld", &reversed), &unbounded()))
    );
}

#[test]
fn shared_suggester_agrees_across_threads() {
    let suggester = Arc::new(Suggester::new(vocabulary(ENGLISH_WORDS), None));
    let expected = tag_strings(&suggester.suggest("thisisatest", 5));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let suggester = Arc::clone(&suggester);
                scope.spawn(move || tag_strings(&suggester.suggest("thisisatest", 5)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
