//! Analysis report models
//!
//! Aggregated per-section statistics, cliché findings and the consolidated
//! report the editor consumes in one call.

use serde::{Deserialize, Serialize};

use super::prosody::{LineProsody, RhymeConnection};

/// Ending-stability verdict for a section or a whole document
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Mixed,
    Unstable,
}

impl Default for Stability {
    fn default() -> Self {
        Stability::Mixed
    }
}

/// Aggregated statistics for one section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    /// Section name, verbatim from the tag
    pub name: String,

    /// Analyzed (non-blank, non-tag) lines in the section
    pub line_count: usize,

    /// Letter scheme of the section's own lines, e.g. "AABB"
    pub rhyme_scheme: String,

    /// Ending-stability verdict over the section's lines
    pub stability: Stability,

    /// Mean syllable count per line
    pub average_syllables: f64,

    /// Population variance of the per-line syllable counts
    pub line_variance: f64,
}

/// One detected cliché occurrence
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClicheMatch {
    /// The matched phrase, as listed in the lexicon
    pub phrase: String,

    /// 1-based line of the occurrence
    pub line_number: usize,

    /// Character offset of the match start within the line
    pub start_index: usize,

    /// Exclusive character offset of the match end
    pub end_index: usize,

    /// Replacement idea from the lexicon
    pub suggestion: String,
}

/// Consolidated prosody analysis of a lyric document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProsodyReport {
    /// Per-line measurements, in document order
    pub lines: Vec<LineProsody>,

    /// Per-section aggregates, in document order
    pub sections: Vec<SectionAnalysis>,

    /// Majority ending-stability verdict across all lines
    pub overall_stability: Stability,

    /// Letter scheme over the whole document's lines
    pub dominant_rhyme_scheme: String,

    /// Rhyme relationships across the whole document
    pub rhyme_connections: Vec<RhymeConnection>,

    /// Cliché occurrences found anywhere in the text
    pub cliche_detections: Vec<ClicheMatch>,
}
