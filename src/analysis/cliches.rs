//! Cliché detection
//!
//! Scans each line for the lexicon's known trite phrases, case-insensitively,
//! and reports character offsets the editor can underline.

use crate::models::{ClicheMatch, Lexicon};

/// Find known clichés in a document.
///
/// Each phrase is reported at most once per line, at its first occurrence.
/// Phrases are matched independently, so a line can produce several matches
/// from different table entries even when they overlap. Offsets are in
/// characters within the line, end exclusive.
pub fn detect_cliches(text: &str, lexicon: &Lexicon) -> Vec<ClicheMatch> {
    let lowered_lines: Vec<String> = text.split('\n').map(|l| l.to_lowercase()).collect();
    let mut found: Vec<ClicheMatch> = Vec::new();

    for entry in &lexicon.cliches {
        let phrase = entry.phrase.to_lowercase();
        if phrase.is_empty() {
            continue;
        }
        for (idx, line) in lowered_lines.iter().enumerate() {
            if let Some(byte_start) = line.find(&phrase) {
                let start_index = line[..byte_start].chars().count();
                found.push(ClicheMatch {
                    phrase: entry.phrase.clone(),
                    line_number: idx + 1,
                    start_index,
                    end_index: start_index + phrase.chars().count(),
                    suggestion: entry.suggestion.clone(),
                });
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_phrase_with_offsets() {
        let hits = detect_cliches("My heart on fire burns bright", Lexicon::builtin());
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.phrase, "heart on fire");
        assert_eq!(hit.line_number, 1);
        assert_eq!(hit.start_index, 3);
        assert_eq!(hit.end_index, 16);
        assert!(!hit.suggestion.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let hits = detect_cliches("LOVE IS BLIND, they say", Lexicon::builtin());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phrase, "love is blind");
        assert_eq!(hits[0].start_index, 0);
    }

    #[test]
    fn test_one_match_per_phrase_per_line() {
        let hits = detect_cliches("heart on fire, heart on fire", Lexicon::builtin());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].start_index, 0);
    }

    #[test]
    fn test_same_phrase_on_two_lines() {
        let hits = detect_cliches("heart on fire\nheart on fire", Lexicon::builtin());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].line_number, 1);
        assert_eq!(hits[1].line_number, 2);
    }

    #[test]
    fn test_overlapping_table_entries_both_match() {
        let lexicon = Lexicon::new(
            &[],
            &[],
            &[("on fire", "alight"), ("heart on fire", "a furnace in my chest")],
        );
        let hits = detect_cliches("my heart on fire", &lexicon);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_clean_text_yields_nothing() {
        assert!(detect_cliches("original imagery only", Lexicon::builtin()).is_empty());
        assert!(detect_cliches("", Lexicon::builtin()).is_empty());
    }
}
