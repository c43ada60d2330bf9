//! Parsing module for the lyric engine
//!
//! Converts raw lyric text into the section structure the analysis and
//! editing layers consume.

pub mod sections;

// Re-export commonly used types
pub use sections::*;
