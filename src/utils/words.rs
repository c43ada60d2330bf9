//! Word normalization helpers
//!
//! Shared lowercase/strip routines used by syllable counting, rhyme-sound
//! extraction and ending classification. Analysis operates on ASCII letters
//! only; anything else is stripped before the heuristics run.

/// Normalize a word for analysis: lowercase, ASCII letters only.
///
/// Punctuation, digits and non-Latin characters are dropped, so "Bright!"
/// and "bright" normalize to the same form. May return an empty string.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Extract the normalized ending word of a line.
///
/// The last whitespace-separated token, cleaned. Lines with no usable word
/// (empty, or tokens with no letters) yield an empty string.
pub fn ending_word(line: &str) -> String {
    line.split_whitespace()
        .next_back()
        .map(clean_word)
        .unwrap_or_default()
}
