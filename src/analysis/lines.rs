//! Per-line prosody measurement
//!
//! Walks a document, skipping tag and blank lines, and measures each
//! surviving line: syllable total, ending word, rhyme sound, and how the
//! ending resolves against the lexicon's suffix lists.

use crate::analysis::rhyme::rhyme_sound;
use crate::analysis::syllables::count_line_syllables;
use crate::models::{EndingType, Lexicon, LineProsody};
use crate::parse::sections::is_section_tag;
use crate::utils::words::{clean_word, ending_word};

/// Classify how a word's ending resolves.
///
/// Stable suffixes are checked before unstable ones; within a list the first
/// match wins. Words matching neither list are neutral, as are words that
/// normalize to nothing.
pub fn classify_ending(word: &str, lexicon: &Lexicon) -> EndingType {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return EndingType::Neutral;
    }
    if lexicon
        .stable_endings
        .iter()
        .any(|suffix| cleaned.ends_with(suffix.as_str()))
    {
        return EndingType::Stable;
    }
    if lexicon
        .unstable_endings
        .iter()
        .any(|suffix| cleaned.ends_with(suffix.as_str()))
    {
        return EndingType::Unstable;
    }
    EndingType::Neutral
}

/// Measure every non-blank, non-tag line of a document.
///
/// Line numbers are 1-based positions in the original text. Skipped lines
/// keep their slots, so reported numbers match the editor's gutter.
pub fn analyze_lines(text: &str, lexicon: &Lexicon) -> Vec<LineProsody> {
    let mut measured: Vec<LineProsody> = Vec::new();

    for (idx, raw) in text.split('\n').enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || is_section_tag(raw) {
            continue;
        }

        let word = ending_word(trimmed);
        measured.push(LineProsody {
            line_number: idx + 1,
            text: trimmed.to_string(),
            rhyme_sound: rhyme_sound(&word),
            syllable_count: count_line_syllables(trimmed),
            ending_type: classify_ending(&word, lexicon),
            ending_word: word,
        });
    }

    measured
}
