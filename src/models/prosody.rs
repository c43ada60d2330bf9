//! Per-line prosody models
//!
//! Measurements derived for each lyric line (syllables, ending word, rhyme
//! sound, ending stability) and the rhyme-scheme structures built on top of
//! them.

use serde::{Deserialize, Serialize};

/// How a line ending resolves
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndingType {
    /// Closed, resolved-sounding ending ("night", "alone")
    Stable,
    /// Open, continuation-sounding ending ("running", "forever")
    Unstable,
    /// No suffix-list match either way
    Neutral,
}

/// Prosodic measurements for one non-blank, non-tag lyric line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineProsody {
    /// 1-based position in the original text; skipped lines keep their slots
    pub line_number: usize,

    /// The line's text, trimmed
    pub text: String,

    /// Normalized last word of the line
    pub ending_word: String,

    /// Heuristic rhyme key: last vowel of the ending word through its end
    pub rhyme_sound: String,

    /// Total syllables across all words of the line
    pub syllable_count: u32,

    /// Ending stability classification
    pub ending_type: EndingType,
}

/// Strength of a rhyme relationship
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RhymeKind {
    /// Identical rhyme sounds
    Perfect,
    /// Distinct sounds sharing their last two characters
    Near,
}

/// A rhyme relationship between two analyzed lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RhymeConnection {
    /// 0-based indices into the analyzed line list, earlier line first
    pub lines: [usize; 2],

    /// Scheme letter of the rhyme group the connection belongs to
    pub letter: String,

    /// Connection strength
    #[serde(rename = "type")]
    pub kind: RhymeKind,
}

/// Result of rhyme-scheme detection over an ordered list of lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RhymeAnalysis {
    /// Concatenated per-line letters, e.g. "AABB"
    pub scheme: String,

    /// Letter per analyzed line; empty string when the line has no rhyme sound
    pub letters: Vec<String>,

    /// Pairwise rhyme relationships, in scan order
    pub connections: Vec<RhymeConnection>,
}
