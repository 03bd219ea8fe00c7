//! Loading vocabulary and frequency files.
//!
//! Both loaders are all-or-nothing: the first unreadable file or malformed
//! frequency aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::LoadError;
use crate::matcher::Vocabulary;
use crate::scoring::FrequencyTable;

/// Words from a dictionary file: one per line, trimmed, blanks skipped.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LoadError::io(path, e))?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    tracing::debug!(file = %path.display(), words = words.len(), "dictionary loaded");
    Ok(words)
}

/// Build a [`Vocabulary`] from every word in `paths`.
pub fn load_vocabulary<P: AsRef<Path>>(paths: &[P]) -> Result<Vocabulary, LoadError> {
    let start = Instant::now();
    let mut words = Vec::new();
    for path in paths {
        words.extend(load_words(path)?);
    }
    let vocabulary = Vocabulary::new(&words)?;

    tracing::debug!(
        files = paths.len(),
        words = vocabulary.len(),
        duration_ns = start.elapsed().as_nanos() as u64,
        "vocabulary loaded"
    );
    Ok(vocabulary)
}

/// Read a frequency table file.
///
/// The first line is a header. Every other line with exactly three
/// whitespace-separated fields is `word <ignored> frequency`; other lines are
/// skipped. See [`parse_frequencies`].
pub fn load_frequencies(path: impl AsRef<Path>) -> Result<FrequencyTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let table = parse_frequencies(BufReader::new(file), path)?;

    tracing::debug!(file = %path.display(), words = table.len(), "frequencies loaded");
    Ok(table)
}

/// Parse frequency records from `reader`. `path` only labels errors.
///
/// Words that are not purely ASCII letters are ignored, words are lowercased,
/// and a repeated word keeps its highest frequency. A frequency that is not
/// an integer fails the whole parse.
pub fn parse_frequencies<R: BufRead>(reader: R, path: &Path) -> Result<FrequencyTable, LoadError> {
    let mut table = FrequencyTable::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| LoadError::io(path, e))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [word, _, frequency] = fields.as_slice() else {
            continue;
        };
        if !crate::utils::is_alphabetic_word(word) {
            continue;
        }

        let count: u64 = frequency.parse().map_err(|_| LoadError::InvalidFrequency {
            path: path.to_path_buf(),
            line: index + 1,
            word: word.to_string(),
            value: frequency.to_string(),
        })?;
        table.record(word, count);
    }

    Ok(table)
}
