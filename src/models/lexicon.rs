//! Heuristic dictionaries
//!
//! Suffix lists and the cliché table are data, not code: every analysis
//! entry point takes a `&Lexicon`, and the built-in dictionaries are just
//! the default instance. Callers can deserialize a custom lexicon from JSON
//! to swap in their own lists without touching the algorithms.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A trite phrase and the alternative offered for it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClicheEntry {
    pub phrase: String,
    pub suggestion: String,
}

/// Injected dictionaries driving ending classification and cliché detection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    /// Word endings that sound closed and resolved
    pub stable_endings: Vec<String>,

    /// Word endings that sound open, pulling the ear forward
    pub unstable_endings: Vec<String>,

    /// Known trite phrases with replacement suggestions
    pub cliches: Vec<ClicheEntry>,
}

lazy_static! {
    static ref BUILTIN: Lexicon = Lexicon::new(
        &[
            "ight", "ound", "eat", "ay", "one", "ite", "ine", "ake", "old",
            "ome", "ore", "ell", "own", "ame",
        ],
        &[
            "ing", "er", "ly", "tion", "sion", "ness", "ment", "ful", "ow",
        ],
        &[
            ("heart on fire", "a furnace in my chest"),
            ("love is blind", "love never checks the map"),
            ("against all odds", "with the deck stacked high"),
            ("tears fall like rain", "tears carve their own rivers"),
            ("heart of gold", "hands that give without counting"),
            ("break my heart", "crack me down the middle"),
            ("crying in the rain", "letting the storm do the grieving"),
            ("end of the road", "where the pavement gives up"),
            ("heart and soul", "every wire in me"),
            ("burning love", "a love that will not bank its coals"),
            ("shoulder to cry on", "a place to set the weight down"),
            ("time heals all wounds", "time just teaches scars to talk"),
            ("meant to be", "written in something older than us"),
            ("one in a million", "the odd number in every crowd"),
        ],
    );
}

impl Lexicon {
    /// Build a lexicon from plain slices.
    pub fn new(stable: &[&str], unstable: &[&str], cliches: &[(&str, &str)]) -> Self {
        Lexicon {
            stable_endings: stable.iter().map(|s| s.to_string()).collect(),
            unstable_endings: unstable.iter().map(|s| s.to_string()).collect(),
            cliches: cliches
                .iter()
                .map(|(phrase, suggestion)| ClicheEntry {
                    phrase: phrase.to_string(),
                    suggestion: suggestion.to_string(),
                })
                .collect(),
        }
    }

    /// The built-in dictionaries shipped with the engine.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse a custom lexicon from its JSON form.
    pub fn from_json(json: &str) -> Result<Lexicon, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_are_populated() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.stable_endings.iter().any(|s| s == "ight"));
        assert!(lexicon.unstable_endings.iter().any(|s| s == "ing"));
        assert!(lexicon.cliches.len() >= 10);
    }

    #[test]
    fn test_builtin_has_suggestions_for_every_phrase() {
        for entry in &Lexicon::builtin().cliches {
            assert!(!entry.phrase.is_empty());
            assert!(
                !entry.suggestion.is_empty(),
                "missing suggestion for '{}'",
                entry.phrase
            );
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "stableEndings": ["ight"],
            "unstableEndings": ["ing"],
            "cliches": [{"phrase": "heart on fire", "suggestion": "a struck match"}]
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.stable_endings, vec!["ight"]);
        assert_eq!(lexicon.cliches[0].phrase, "heart on fire");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Lexicon::from_json("{not json").is_err());
    }
}
