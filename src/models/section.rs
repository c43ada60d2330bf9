//! Section model and canonical section types
//!
//! A section is a named, contiguous block of lyric text opened by a bracket
//! tag line such as `[Verse 1]` and closed by the next tag or the end of the
//! text.

use serde::{Deserialize, Serialize};

/// A named block of lyric text delimited by a bracket tag line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Tag text without the brackets, verbatim (e.g. "Verse 1")
    pub name: String,

    /// 0-based index of the tag line in the original text
    pub start_line: usize,

    /// 0-based index of the last line belonging to this section
    pub end_line: usize,

    /// Text between this tag and the next, joined with newlines and trimmed
    pub content: String,
}

impl Section {
    pub fn new(name: &str, start_line: usize, end_line: usize, content: &str) -> Self {
        Section {
            name: name.to_string(),
            start_line,
            end_line,
            content: content.to_string(),
        }
    }

    /// Canonical type inferred from the section name, if it has one.
    pub fn section_type(&self) -> Option<SectionType> {
        SectionType::from_name(&self.name)
    }
}

/// Canonical section categories recognized inside tag names
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionType {
    Verse,
    Chorus,
    #[serde(rename = "Pre-Chorus")]
    PreChorus,
    Bridge,
    Intro,
    Outro,
    Hook,
}

impl SectionType {
    /// All canonical types, in renumbering order
    pub const ALL: [SectionType; 7] = [
        SectionType::Verse,
        SectionType::Chorus,
        SectionType::PreChorus,
        SectionType::Bridge,
        SectionType::Intro,
        SectionType::Outro,
        SectionType::Hook,
    ];

    /// Classify a free-text section name.
    ///
    /// Case-insensitive substring matching in fixed priority order. The
    /// Chorus arm requires the absence of "pre", so "Pre-Chorus 2" falls
    /// through to the Pre-Chorus arm instead of matching Chorus.
    pub fn from_name(name: &str) -> Option<SectionType> {
        let lower = name.to_lowercase();
        if lower.contains("verse") {
            Some(SectionType::Verse)
        } else if lower.contains("chorus") && !lower.contains("pre") {
            Some(SectionType::Chorus)
        } else if lower.contains("pre-chorus") || lower.contains("prechorus") {
            Some(SectionType::PreChorus)
        } else if lower.contains("bridge") {
            Some(SectionType::Bridge)
        } else if lower.contains("intro") {
            Some(SectionType::Intro)
        } else if lower.contains("outro") {
            Some(SectionType::Outro)
        } else if lower.contains("hook") {
            Some(SectionType::Hook)
        } else {
            None
        }
    }

    /// Parse a canonical type from its display label ("Verse", "Pre-Chorus").
    pub fn from_label(label: &str) -> Option<SectionType> {
        let lower = label.trim().to_lowercase();
        SectionType::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == lower || (lower == "prechorus" && *kind == SectionType::PreChorus))
    }

    /// Display name as it appears inside tags
    pub fn name(&self) -> &'static str {
        match self {
            SectionType::Verse => "Verse",
            SectionType::Chorus => "Chorus",
            SectionType::PreChorus => "Pre-Chorus",
            SectionType::Bridge => "Bridge",
            SectionType::Intro => "Intro",
            SectionType::Outro => "Outro",
            SectionType::Hook => "Hook",
        }
    }

    /// Types whose tag stays bare while the document has only one of them.
    ///
    /// Verses and choruses repeat by convention and are always numbered;
    /// everything else picks up a number only once a second one appears.
    pub fn is_singleton_style(&self) -> bool {
        !matches!(self, SectionType::Verse | SectionType::Chorus)
    }
}
