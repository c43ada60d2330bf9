//! Caret-aware section tag placement
//!
//! The editor hands over raw text plus character offsets; tags land on their
//! own line with blank-line separation from unrelated text above, and the
//! offsets come back shifted so the caller's caret or selection keeps its
//! place in the rewritten string. All offsets are in characters, not bytes.

use serde::{Deserialize, Serialize};

/// Result of inserting a tag at a caret position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionInsertion {
    pub new_text: String,
    pub new_caret_offset: usize,
}

/// Result of wrapping a selection with a section tag
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionWrap {
    pub new_text: String,
    pub new_start_offset: usize,
    pub new_end_offset: usize,
}

/// How the tag landed in the text, for offset remapping
enum TagPlacement {
    /// A blank target line was replaced by the tag
    Inline {
        line_start: usize,
        old_len: usize,
        tag_len: usize,
    },
    /// The tag (plus optional blank separator) was inserted above the
    /// target line; `inserted` counts all added characters
    Above { line_start: usize, inserted: usize },
}

/// Insert a section tag at a caret position.
///
/// A caret on a blank line replaces that line with the tag and lands at the
/// tag's end; a caret on a content line pushes the tag onto its own line
/// above, with a blank separator when the previous line has text, and keeps
/// its position within the content.
pub fn insert_section_at_position(text: &str, caret_offset: usize, tag: &str) -> SectionInsertion {
    let offset = caret_offset.min(text.chars().count());
    let (new_text, placement) = place_tag(text, offset, tag);
    let new_caret_offset = map_offset(offset, &placement);
    SectionInsertion {
        new_text,
        new_caret_offset,
    }
}

/// Put a section tag above the selected text, keeping the selection.
///
/// Placement follows the same blank-line rules as
/// [`insert_section_at_position`], keyed on the selection start. Reversed
/// offsets are normalized rather than rejected.
pub fn wrap_text_with_section(
    text: &str,
    start_offset: usize,
    end_offset: usize,
    tag: &str,
) -> SectionWrap {
    let total = text.chars().count();
    let mut start = start_offset.min(total);
    let mut end = end_offset.min(total);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let (new_text, placement) = place_tag(text, start, tag);
    SectionWrap {
        new_text,
        new_start_offset: map_offset(start, &placement),
        new_end_offset: map_offset(end, &placement),
    }
}

/// Rewrite `text` with `tag` placed relative to the line containing
/// `offset`. The offset must already be clamped to the text length.
fn place_tag(text: &str, offset: usize, tag: &str) -> (String, TagPlacement) {
    let lines: Vec<&str> = text.split('\n').collect();
    let (index, line_start, line_len) = locate_line(&lines, offset);
    let tag_len = tag.chars().count();

    let mut new_lines: Vec<&str> = Vec::with_capacity(lines.len() + 2);

    if lines[index].trim().is_empty() {
        // Blank line: the tag takes its place
        new_lines.extend_from_slice(&lines[..index]);
        new_lines.push(tag);
        new_lines.extend_from_slice(&lines[index + 1..]);
        (
            new_lines.join("\n"),
            TagPlacement::Inline {
                line_start,
                old_len: line_len,
                tag_len,
            },
        )
    } else {
        // Content line: tag goes on its own line above, separated from any
        // text on the previous line by a blank line
        let needs_separator = index > 0 && !lines[index - 1].trim().is_empty();
        new_lines.extend_from_slice(&lines[..index]);
        if needs_separator {
            new_lines.push("");
        }
        new_lines.push(tag);
        new_lines.extend_from_slice(&lines[index..]);

        let inserted = tag_len + 1 + usize::from(needs_separator);
        (
            new_lines.join("\n"),
            TagPlacement::Above {
                line_start,
                inserted,
            },
        )
    }
}

/// Find the line containing a character offset.
///
/// Returns (line index, char offset of line start, line length in chars).
/// An offset at a line's end (before its newline) belongs to that line.
fn locate_line(lines: &[&str], offset: usize) -> (usize, usize, usize) {
    let mut index = 0;
    let mut line_start = 0;
    loop {
        let len = lines[index].chars().count();
        if offset <= line_start + len || index + 1 == lines.len() {
            return (index, line_start, len);
        }
        line_start += len + 1;
        index += 1;
    }
}

/// Map a pre-edit character offset into the rewritten text.
fn map_offset(offset: usize, placement: &TagPlacement) -> usize {
    match *placement {
        TagPlacement::Inline {
            line_start,
            old_len,
            tag_len,
        } => {
            if offset < line_start {
                offset
            } else if offset <= line_start + old_len {
                // Offsets inside the replaced blank line pin to the tag end
                line_start + tag_len
            } else {
                offset - old_len + tag_len
            }
        }
        TagPlacement::Above {
            line_start,
            inserted,
        } => {
            if offset < line_start {
                offset
            } else {
                offset + inserted
            }
        }
    }
}
