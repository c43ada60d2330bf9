//! Section tag grammar and section parsing
//!
//! A section opens at a line whose trimmed content is exactly a bracket tag
//! like `[Verse 1]` and runs until the line before the next tag, or the end
//! of the text. Text above the first tag belongs to no section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Section;

/// Matches a full-line section tag, capturing the name inside the brackets.
/// Lines with text outside the brackets ("la [Verse 1]") do not match, and
/// a closing bracket ends the name, so "[Verse 1]]" is not a tag either.
static SECTION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("valid section tag pattern"));

/// Extract the tag name from a line, if the line is a section tag.
///
/// Surrounding whitespace is ignored, so an indented `  [Chorus]` still
/// counts as a tag line.
pub fn section_tag_name(line: &str) -> Option<&str> {
    SECTION_TAG
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a line is a section tag line.
pub fn is_section_tag(line: &str) -> bool {
    section_tag_name(line).is_some()
}

/// Split lyric text into named sections, in document order.
///
/// Line indices are 0-based into the text's newline-split lines. A section's
/// `end_line` is the line before the next tag (or the last line of the
/// text); a tag on the final line yields `end_line == start_line`. Section
/// content is the joined text between the tags, trimmed.
pub fn parse_sections(text: &str) -> Vec<Section> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut sections: Vec<Section> = Vec::new();
    // Currently open section: (name, tag line index)
    let mut open: Option<(String, usize)> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(name) = section_tag_name(line) {
            if let Some((open_name, tag_idx)) = open.take() {
                sections.push(close_section(open_name, tag_idx, idx - 1, &lines));
            }
            open = Some((name.to_string(), idx));
        }
    }

    if let Some((open_name, tag_idx)) = open {
        sections.push(close_section(open_name, tag_idx, lines.len() - 1, &lines));
    }

    log::debug!("parse_sections: {} sections", sections.len());
    sections
}

fn close_section(name: String, start_line: usize, end_line: usize, lines: &[&str]) -> Section {
    let content = if start_line + 1 <= end_line {
        lines[start_line + 1..=end_line].join("\n").trim().to_string()
    } else {
        String::new()
    };
    Section {
        name,
        start_line,
        end_line,
        content,
    }
}
