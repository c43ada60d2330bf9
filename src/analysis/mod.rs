//! Derived prosody analysis
//!
//! Stateless, on-demand analysis over raw text. Nothing in this module
//! stores document state; every call recomputes from the string it is
//! given, so results can never go stale behind an editor buffer.
//!
//! ## Modules
//!
//! - `syllables`: vowel-group syllable counting
//! - `rhyme`: rhyme sounds, scheme letters and rhyme connections
//! - `lines`: per-line prosody measurement
//! - `cliches`: known-phrase detection
//! - `report`: section aggregation and the consolidated report

pub mod cliches;
pub mod lines;
pub mod report;
pub mod rhyme;
pub mod syllables;

// Re-export commonly used types
pub use cliches::detect_cliches;
pub use lines::{analyze_lines, classify_ending};
pub use report::{analyze_prosody, analyze_section};
pub use rhyme::{detect_rhyme_scheme, rhyme_sound, scheme_for_lines};
pub use syllables::{count_line_syllables, count_syllables};
