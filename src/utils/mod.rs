//! Utility modules for the lyric engine
//!
//! Small shared helpers used across parsing and analysis.

pub mod words;

// Re-export commonly used types
pub use words::*;
