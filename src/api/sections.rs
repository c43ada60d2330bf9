//! Section parsing and editing API
//!
//! WASM functions the editor calls to split lyric text into sections and to
//! apply structural edits (tag generation, renumbering, insertion, rename,
//! delete). Every function is pure: text in, text or structures out.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, edit_error, serialize, validation_error};
use crate::models::{Section, SectionType};
use crate::structure;
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Parsing
// ============================================================================

/// Parse lyric text into an array of sections.
#[wasm_bindgen(js_name = parseSections)]
pub fn parse_sections(text: &str) -> Result<js_sys::Array, JsValue> {
    wasm_info!("parseSections called ({} chars)", text.chars().count());

    let sections = crate::parse::sections::parse_sections(text);
    wasm_log!("  Parsed {} sections", sections.len());

    let array = js_sys::Array::new();
    for section in &sections {
        array.push(&serialize(section, "Section serialization error")?);
    }
    Ok(array)
}

/// Classify a section name into its canonical type name, or null.
#[wasm_bindgen(js_name = getSectionType)]
pub fn get_section_type(name: &str) -> Option<String> {
    SectionType::from_name(name).map(|kind| kind.name().to_string())
}

// ============================================================================
// Tag Generation and Renumbering
// ============================================================================

/// Produce the next tag for a new section of the given type, counting the
/// sections the caller already has.
#[wasm_bindgen(js_name = generateSectionTag)]
pub fn generate_section_tag(sections: JsValue, section_type: &str) -> Result<String, JsValue> {
    let sections: Vec<Section> = deserialize(sections, "Section list deserialization error")?;
    let kind = SectionType::from_label(section_type)
        .ok_or_else(|| validation_error(format!("Unknown section type: {}", section_type)))?;
    Ok(structure::generate_section_tag(&sections, kind))
}

/// Rewrite all typed section tags with sequential numbering.
#[wasm_bindgen(js_name = renumberSections)]
pub fn renumber_sections(text: &str) -> String {
    wasm_info!("renumberSections called");
    structure::renumber_sections(text)
}

// ============================================================================
// Structural Edits
// ============================================================================

/// Insert a section tag at a caret position, returning the rewritten text
/// and the shifted caret offset.
#[wasm_bindgen(js_name = insertSectionAtPosition)]
pub fn insert_section_at_position(
    text: &str,
    caret_offset: usize,
    tag: &str,
) -> Result<JsValue, JsValue> {
    wasm_info!("insertSectionAtPosition called at offset {}", caret_offset);

    let result = structure::insert_section_at_position(text, caret_offset, tag);
    wasm_log!("  Caret {} -> {}", caret_offset, result.new_caret_offset);
    serialize(&result, "Insertion result serialization error")
}

/// Place a section tag above the selected text, returning the rewritten
/// text and the shifted selection offsets.
#[wasm_bindgen(js_name = wrapTextWithSection)]
pub fn wrap_text_with_section(
    text: &str,
    start_offset: usize,
    end_offset: usize,
    tag: &str,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "wrapTextWithSection called for range {}..{}",
        start_offset,
        end_offset
    );

    let result = structure::wrap_text_with_section(text, start_offset, end_offset, tag);
    serialize(&result, "Wrap result serialization error")
}

/// Rename the section at `section_index`. Fails on name collisions.
#[wasm_bindgen(js_name = renameSection)]
pub fn rename_section(text: &str, section_index: usize, new_name: &str) -> Result<String, JsValue> {
    wasm_info!("renameSection called for index {}", section_index);

    structure::rename_section(text, section_index, new_name).map_err(|err| {
        wasm_warn!("renameSection rejected: {}", err);
        edit_error(err)
    })
}

/// Delete the section at `section_index`, tag line and content.
#[wasm_bindgen(js_name = deleteSection)]
pub fn delete_section(text: &str, section_index: usize) -> Result<String, JsValue> {
    wasm_info!("deleteSection called for index {}", section_index);

    structure::delete_section(text, section_index).map_err(|err| {
        wasm_warn!("deleteSection rejected: {}", err);
        edit_error(err)
    })
}
