//! Data models for the lyric engine
//!
//! Value objects produced by parsing and analysis. Everything here crosses
//! the WASM boundary to the editor, so all types are serde-serializable with
//! camelCase field names.
//!
//! ## Modules
//!
//! - `section`: sections and canonical section types
//! - `prosody`: per-line measurements and rhyme structures
//! - `report`: per-section aggregates and the consolidated report
//! - `lexicon`: injected suffix lists and the cliché table

pub mod lexicon;
pub mod prosody;
pub mod report;
pub mod section;

// Re-export commonly used types
pub use lexicon::{ClicheEntry, Lexicon};
pub use prosody::{EndingType, LineProsody, RhymeAnalysis, RhymeConnection, RhymeKind};
pub use report::{ClicheMatch, ProsodyReport, SectionAnalysis, Stability};
pub use section::{Section, SectionType};
