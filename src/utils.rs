//! Utility functions for string processing.

/// Uppercase the first character, leave the rest untouched.
///
/// - "clean" → "Clean"
/// - "a" → "A"
/// - "über" → "Über"
/// - "ßa" → "ßa" (uppercase is two characters)
/// - "" → ""
///
/// The first character is only replaced when its uppercase form is a single
/// character that lowercases back to the original, so the result always
/// lowercases to the same text as `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(uppercase_char(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.to_lowercase().eq(c.to_lowercase()) => u,
        _ => c,
    }
}

/// Does `word` consist only of ASCII letters (and at least one)?
///
/// Frequency tables only keep entries that pass this check.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}
