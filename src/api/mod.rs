//! Lyric Engine WASM API
//!
//! This module provides the JavaScript-facing API for the lyric editor.
//! It includes shared utilities for serialization, error handling and
//! logging, plus the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling and logging
//! - `sections`: Section parsing and structural edits (tags, renumber, rename, delete, insertion)
//! - `analysis`: Prosody analysis (report, rhyme scheme, clichés, word helpers)

pub mod analysis;
pub mod helpers;
pub mod sections;

// Re-export all public functions to present one flat API surface
pub use analysis::{
    analyze_prosody, analyze_prosody_with_lexicon, count_syllables, detect_cliches,
    detect_rhyme_scheme, export_prosody_json, get_rhyme_sound,
};
pub use sections::{
    delete_section, generate_section_tag, get_section_type, insert_section_at_position,
    parse_sections, rename_section, renumber_sections, wrap_text_with_section,
};
