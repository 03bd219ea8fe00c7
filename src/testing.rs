//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::StringMatches;
use crate::matcher::Vocabulary;
use crate::scoring::FrequencyTable;
use crate::types::HashTag;

/// A vocabulary of `words` plus the alphabet.
///
/// # Panics
/// If the automaton cannot be built, which small test vocabularies never hit.
pub fn vocabulary(words: &[&str]) -> Vocabulary {
    match Vocabulary::new(words) {
        Ok(vocabulary) => vocabulary,
        Err(e) => panic!("test vocabulary failed to build: {e}"),
    }
}

/// Match index for `subject` against `words` (plus the alphabet), no frequencies.
///
/// This is the canonical implementation used across all tests.
pub fn string_matches(subject: &str, words: &[&str]) -> StringMatches {
    let vocabulary = vocabulary(words);
    StringMatches::build(subject, vocabulary.find_matches(subject), None)
}

/// Match index for `subject` with a frequency table.
pub fn string_matches_with_frequency(
    subject: &str,
    words: &[&str],
    frequency: &FrequencyTable,
) -> StringMatches {
    let vocabulary = vocabulary(words);
    StringMatches::build(subject, vocabulary.find_matches(subject), Some(frequency))
}

/// Frequency table from `(word, count)` pairs.
pub fn frequency_table(entries: &[(&str, u64)]) -> FrequencyTable {
    entries.iter().copied().collect()
}

/// Rendered tags, in order.
pub fn tag_strings(tags: &[HashTag]) -> Vec<String> {
    tags.iter().map(HashTag::tag).collect()
}

/// `(tag, word count)` pairs, sorted, for order-insensitive comparison.
pub fn tag_multiset(tags: &[HashTag]) -> Vec<(String, usize)> {
    let mut pairs: Vec<(String, usize)> = tags.iter().map(|t| (t.tag(), t.word_count())).collect();
    pairs.sort();
    pairs
}

/// Vocabulary used by property tests: short, overlapping, plenty of ambiguity.
pub const SMALL_VOCABULARY: &[&str] = &[
    "ab", "abc", "ba", "bab", "cab", "abba", "ca", "bc", "cc", "aba",
];
