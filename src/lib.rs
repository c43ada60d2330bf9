//! Lyric Structure and Prosody WASM Module
//!
//! Core engine for the songwriting editor: splits free-form lyric text into
//! named sections and derives prosody feedback (syllables, rhyme scheme,
//! ending stability, clichés) on demand. All functions are pure; the editor
//! buffer remains the single source of truth.

pub mod analysis;
pub mod api;
pub mod models;
pub mod parse;
pub mod structure;
pub mod utils;

// Re-export commonly used types
pub use models::lexicon::*;
pub use models::prosody::*;
pub use models::report::*;
pub use models::section::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Lyric engine WASM module initialized");
}
