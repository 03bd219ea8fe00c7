//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for the memoized, explicit-stack engine.

use std::collections::HashSet;

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Every segmentation of `subject` by brute force over all cut points.
///
/// A piece is allowed if it is a single ASCII letter or (case-insensitively)
/// one of `words`. O(2^n) but trivially correct.
pub fn oracle_segmentations(subject: &str, words: &[&str]) -> Vec<Vec<String>> {
    let allowed: HashSet<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
    let is_word = |piece: &str| {
        (piece.len() == 1 && piece.as_bytes()[0].is_ascii_alphabetic())
            || allowed.contains(&piece.to_ascii_lowercase())
    };

    let n = subject.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    // Bit i set means "cut after byte i"
    for mask in 0u32..(1 << (n - 1)) {
        let mut pieces = Vec::new();
        let mut start = 0;
        for i in 0..n {
            if i == n - 1 || mask & (1 << i) != 0 {
                pieces.push(subject[start..=i].to_string());
                start = i + 1;
            }
        }
        if pieces.iter().all(|p| is_word(p)) {
            out.push(pieces);
        }
    }
    out
}

/// Length-only score of a word: `len²`.
pub fn oracle_word_score(word: &str) -> f64 {
    let len = word.chars().count() as f64;
    len * len
}

/// Render a segmentation as a hashtag.
pub fn oracle_tag(pieces: &[String]) -> String {
    pieces
        .iter()
        .map(|p| {
            let mut chars = p.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Mean word score of a segmentation.
pub fn oracle_mean_score(pieces: &[String]) -> f64 {
    pieces.iter().map(|p| oracle_word_score(p)).sum::<f64>() / pieces.len() as f64
}

/// `(tag, word count)` of every segmentation, sorted.
pub fn oracle_tag_multiset(subject: &str, words: &[&str]) -> Vec<(String, usize)> {
    let mut pairs: Vec<(String, usize)> = oracle_segmentations(subject, words)
        .iter()
        .map(|pieces| (oracle_tag(pieces), pieces.len()))
        .collect();
    pairs.sort();
    pairs
}

/// Sort `(tag, score)` pairs: score descending, then tag descending.
pub fn oracle_rank(mut entries: Vec<(String, f64)>) -> Vec<(String, f64)> {
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    entries
}

// =============================================================================
// ORACLE SELF-TESTS
// =============================================================================

#[test]
fn oracle_finds_all_abc_segmentations() {
    let mut tags: Vec<String> = oracle_segmentations("abc", &["abc", "ab", "bc"])
        .iter()
        .map(|p| oracle_tag(p))
        .collect();
    tags.sort();
    assert_eq!(tags, vec!["ABC", "ABc", "AbC", "Abc"]);
}

#[test]
fn oracle_scores_cleaner() {
    let pieces = vec!["clean".to_string(), "e".to_string(), "r".to_string()];
    assert_eq!(oracle_mean_score(&pieces), 9.0);
    assert_eq!(oracle_tag(&pieces), "CleanER");
}

#[test]
fn oracle_rank_breaks_ties_by_tag() {
    let ranked = oracle_rank(vec![
        ("ABc".to_string(), 2.5),
        ("Abc".to_string(), 9.0),
        ("AbC".to_string(), 2.5),
    ]);
    let tags: Vec<&str> = ranked.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tags, vec!["Abc", "AbC", "ABc"]);
}

proptest! {
    /// Letters alone give exactly one segmentation.
    #[test]
    fn oracle_letters_only(subject in "[a-z]{1,10}") {
        let segs = oracle_segmentations(&subject, &[]);
        prop_assert_eq!(segs.len(), 1);
        prop_assert_eq!(segs[0].len(), subject.len());
    }
}
