//! Section editing operations over raw lyric text
//!
//! Every command re-parses the text it is given, rewrites whole tag lines
//! and returns a fresh string. The engine holds no document state between
//! edits; the editor's buffer is the single source of truth.

use crate::models::{Section, SectionType};
use crate::parse::sections::parse_sections;

use super::errors::EditError;

/// Produce the next tag for a new section of the given type.
///
/// Verse and Chorus tags are always numbered. Singleton-style types stay
/// bare while no section of that type exists, then pick up numbers from 2.
pub fn generate_section_tag(sections: &[Section], kind: SectionType) -> String {
    let count = sections
        .iter()
        .filter(|s| s.section_type() == Some(kind))
        .count();

    if kind.is_singleton_style() && count == 0 {
        format!("[{}]", kind.name())
    } else {
        format!("[{} {}]", kind.name(), count + 1)
    }
}

/// Rewrite every typed section tag with sequential numbering.
///
/// Sections are grouped by canonical type in document order and each group
/// is renumbered 1..k. A singleton-style type with exactly one member
/// collapses to its bare name. Sections whose names have no canonical type
/// are left untouched. Idempotent: renumbering twice changes nothing more.
pub fn renumber_sections(text: &str) -> String {
    let sections = parse_sections(text);
    if sections.is_empty() {
        return text.to_string();
    }

    let mut lines: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();

    for kind in SectionType::ALL {
        let group: Vec<&Section> = sections
            .iter()
            .filter(|s| s.section_type() == Some(kind))
            .collect();
        let collapse = kind.is_singleton_style() && group.len() == 1;

        for (position, section) in group.iter().enumerate() {
            lines[section.start_line] = if collapse {
                format!("[{}]", kind.name())
            } else {
                format!("[{} {}]", kind.name(), position + 1)
            };
        }
    }

    lines.join("\n")
}

/// Rename the section at `section_index`, rewriting only its tag line.
///
/// The new name is trimmed and must be non-empty, writable as a tag (no "]"
/// or newline), and not collide case-insensitively with any other section's
/// name. Renaming a section to its own name is allowed.
pub fn rename_section(text: &str, section_index: usize, new_name: &str) -> Result<String, EditError> {
    let sections = parse_sections(text);
    let section = sections
        .get(section_index)
        .ok_or(EditError::SectionOutOfBounds {
            index: section_index,
            count: sections.len(),
        })?;

    let name = new_name.trim();
    if name.is_empty() {
        return Err(EditError::EmptySectionName);
    }
    // A "]" or newline in the name would stop the tag line from re-parsing
    if name.contains(']') || name.contains('\n') {
        return Err(EditError::InvalidSectionName {
            name: name.to_string(),
        });
    }

    let lowered = name.to_lowercase();
    let collision = sections
        .iter()
        .enumerate()
        .any(|(i, other)| i != section_index && other.name.to_lowercase() == lowered);
    if collision {
        return Err(EditError::DuplicateSectionName {
            name: name.to_string(),
        });
    }

    let mut lines: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
    lines[section.start_line] = format!("[{}]", name);
    Ok(lines.join("\n"))
}

/// Delete the section at `section_index`: its tag line through its last
/// content line. Surrounding sections are untouched.
pub fn delete_section(text: &str, section_index: usize) -> Result<String, EditError> {
    let sections = parse_sections(text);
    let section = sections
        .get(section_index)
        .ok_or(EditError::SectionOutOfBounds {
            index: section_index,
            count: sections.len(),
        })?;

    let lines: Vec<&str> = text.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    kept.extend_from_slice(&lines[..section.start_line]);
    if section.end_line + 1 < lines.len() {
        kept.extend_from_slice(&lines[section.end_line + 1..]);
    }
    Ok(kept.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tag_numbered_types() {
        assert_eq!(generate_section_tag(&[], SectionType::Verse), "[Verse 1]");
        assert_eq!(generate_section_tag(&[], SectionType::Chorus), "[Chorus 1]");

        let sections = parse_sections("[Verse 1]\na\n[Verse 2]\nb");
        assert_eq!(
            generate_section_tag(&sections, SectionType::Verse),
            "[Verse 3]"
        );
    }

    #[test]
    fn test_generate_tag_singleton_types() {
        assert_eq!(generate_section_tag(&[], SectionType::Bridge), "[Bridge]");

        let sections = parse_sections("[Bridge]\nmiddle eight");
        assert_eq!(
            generate_section_tag(&sections, SectionType::Bridge),
            "[Bridge 2]"
        );
    }

    #[test]
    fn test_renumber_fills_gaps() {
        let text = "[Verse 1]\na\n[Chorus]\nb\n[Verse 3]\nc";
        let result = renumber_sections(text);
        assert_eq!(result, "[Verse 1]\na\n[Chorus 1]\nb\n[Verse 2]\nc");
    }

    #[test]
    fn test_renumber_collapses_lone_singleton() {
        let text = "[Bridge 2]\nonly bridge";
        assert_eq!(renumber_sections(text), "[Bridge]\nonly bridge");
    }

    #[test]
    fn test_renumber_numbers_repeated_singletons() {
        let text = "[Bridge]\na\n[Bridge]\nb";
        assert_eq!(renumber_sections(text), "[Bridge 1]\na\n[Bridge 2]\nb");
    }

    #[test]
    fn test_renumber_keeps_custom_names() {
        let text = "[Intermission]\nwait here\n[Verse 2]\na";
        let result = renumber_sections(text);
        assert_eq!(result, "[Intermission]\nwait here\n[Verse 1]\na");
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let text = "[Verse 2]\na\n[Bridge]\nb\n[Verse 5]\nc\n[Chorus]\nd";
        let once = renumber_sections(text);
        let twice = renumber_sections(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_renumber_without_sections_is_noop() {
        assert_eq!(renumber_sections("no tags here"), "no tags here");
    }

    #[test]
    fn test_rename_rewrites_tag_line() {
        let text = "[Verse 1]\na\n[Chorus]\nb";
        let result = rename_section(text, 1, "Refrain").unwrap();
        assert_eq!(result, "[Verse 1]\na\n[Refrain]\nb");
    }

    #[test]
    fn test_rename_rejects_duplicates_case_insensitive() {
        let text = "[Verse 1]\na\n[Chorus]\nb";
        let err = rename_section(text, 0, "chorus").unwrap_err();
        assert_eq!(
            err,
            EditError::DuplicateSectionName {
                name: "chorus".to_string()
            }
        );
    }

    #[test]
    fn test_rename_to_own_name_is_allowed() {
        let text = "[Chorus]\nb";
        let result = rename_section(text, 0, "Chorus").unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn test_rename_validates_name_and_index() {
        let text = "[Verse 1]\na";
        assert_eq!(
            rename_section(text, 0, "   ").unwrap_err(),
            EditError::EmptySectionName
        );
        assert_eq!(
            rename_section(text, 3, "Outro").unwrap_err(),
            EditError::SectionOutOfBounds { index: 3, count: 1 }
        );
    }

    #[test]
    fn test_delete_removes_tag_and_content() {
        let text = "[Verse 1]\na\n[Chorus]\nb\n[Verse 2]\nc";
        let result = delete_section(text, 1).unwrap();
        assert_eq!(result, "[Verse 1]\na\n[Verse 2]\nc");
    }

    #[test]
    fn test_delete_last_section() {
        let text = "[Verse 1]\na\n[Outro]\nfade out";
        let result = delete_section(text, 1).unwrap();
        assert_eq!(result, "[Verse 1]\na");
    }

    #[test]
    fn test_delete_out_of_bounds() {
        assert_eq!(
            delete_section("[Verse 1]\na", 2).unwrap_err(),
            EditError::SectionOutOfBounds { index: 2, count: 1 }
        );
    }
}
