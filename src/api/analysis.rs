//! Prosody analysis API
//!
//! WASM functions the editor calls for analysis feedback: the consolidated
//! prosody report, plus the small word-level helpers the UI uses for inline
//! hints. Analysis never mutates text and holds no state between calls.

use wasm_bindgen::prelude::*;

use crate::analysis;
use crate::api::helpers::{deserialize, now_ms, serialize};
use crate::models::Lexicon;
use crate::{wasm_error, wasm_info};

// ============================================================================
// Document Analysis
// ============================================================================

/// Analyze a lyric document with the built-in lexicon.
///
/// Returns the full prosody report: per-line measurements, per-section
/// aggregates, overall stability, rhyme scheme and cliché findings.
#[wasm_bindgen(js_name = analyzeProsody)]
pub fn analyze_prosody(text: &str) -> Result<JsValue, JsValue> {
    let started = now_ms();

    let report = analysis::analyze_prosody(text, Lexicon::builtin());

    if let (Some(t0), Some(t1)) = (started, now_ms()) {
        wasm_info!(
            "analyzeProsody: {} lines, {} sections in {:.2}ms",
            report.lines.len(),
            report.sections.len(),
            t1 - t0
        );
    }

    serialize(&report, "Prosody report serialization error")
}

/// Analyze a lyric document with a caller-supplied lexicon.
///
/// The lexicon carries the suffix lists and cliché table; passing custom
/// lists changes classification without touching the algorithms.
#[wasm_bindgen(js_name = analyzeProsodyWithLexicon)]
pub fn analyze_prosody_with_lexicon(text: &str, lexicon: JsValue) -> Result<JsValue, JsValue> {
    let lexicon: Lexicon = deserialize(lexicon, "Lexicon deserialization error")?;
    let report = analysis::analyze_prosody(text, &lexicon);
    serialize(&report, "Prosody report serialization error")
}

/// Full prosody report as a pretty-printed JSON string, for export and
/// debugging.
#[wasm_bindgen(js_name = exportProsodyJson)]
pub fn export_prosody_json(text: &str) -> Result<String, JsValue> {
    let report = analysis::analyze_prosody(text, Lexicon::builtin());
    serde_json::to_string_pretty(&report).map_err(|e| {
        wasm_error!("exportProsodyJson failed: {}", e);
        JsValue::from_str(&format!("Prosody report JSON error: {}", e))
    })
}

// ============================================================================
// Focused Detectors
// ============================================================================

/// Detect known clichés in the text, with per-line character offsets.
#[wasm_bindgen(js_name = detectCliches)]
pub fn detect_cliches(text: &str) -> Result<JsValue, JsValue> {
    let found = analysis::detect_cliches(text, Lexicon::builtin());
    serialize(&found, "Cliché match serialization error")
}

/// Detect the rhyme scheme of the text's lines.
///
/// Returns the scheme string, per-line letters and pairwise connections.
#[wasm_bindgen(js_name = detectRhymeScheme)]
pub fn detect_rhyme_scheme(text: &str) -> Result<JsValue, JsValue> {
    let lines = analysis::analyze_lines(text, Lexicon::builtin());
    let rhyme = analysis::scheme_for_lines(&lines);
    serialize(&rhyme, "Rhyme analysis serialization error")
}

// ============================================================================
// Word Helpers
// ============================================================================

/// Count syllables in a single word.
#[wasm_bindgen(js_name = countSyllables)]
pub fn count_syllables(word: &str) -> u32 {
    analysis::count_syllables(word)
}

/// Extract the rhyme sound of a word (last vowel through the end).
#[wasm_bindgen(js_name = getRhymeSound)]
pub fn get_rhyme_sound(word: &str) -> String {
    analysis::rhyme_sound(word)
}
