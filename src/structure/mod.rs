//! Section editing commands
//!
//! Operations the editor invokes against raw lyric text: tag generation,
//! renumbering, rename, delete, and caret-aware tag insertion. Each command
//! re-parses the text it receives and returns a fresh string; no document
//! state is stored here.
//!
//! ## Modules
//!
//! - `errors`: rejected-edit error type
//! - `operations`: tag generation, renumbering, rename and delete
//! - `insertion`: caret- and selection-relative tag placement

pub mod errors;
pub mod insertion;
pub mod operations;

// Re-exports for convenience
pub use errors::EditError;
pub use insertion::{
    insert_section_at_position, wrap_text_with_section, SectionInsertion, SectionWrap,
};
pub use operations::{delete_section, generate_section_tag, renumber_sections, rename_section};
