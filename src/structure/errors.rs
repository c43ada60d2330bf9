//! Error types for section editing commands
//!
//! An edit that would corrupt the document's section structure is rejected
//! whole; the text is never partially rewritten.

use thiserror::Error;

/// A rejected section edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Another section already carries this name (case-insensitive)
    #[error("a section named \"{name}\" already exists")]
    DuplicateSectionName { name: String },

    /// Section index outside the parsed section list
    #[error("section index {index} out of bounds ({count} sections)")]
    SectionOutOfBounds { index: usize, count: usize },

    /// A tag cannot hold an empty name
    #[error("section name cannot be empty")]
    EmptySectionName,

    /// The name could not be written back as a tag line
    #[error("section name cannot contain \"]\" or newlines: {name:?}")]
    InvalidSectionName { name: String },
}
