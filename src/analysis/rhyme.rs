//! Rhyme sounds and scheme detection
//!
//! The rhyme key of a line is the tail of its ending word, from the last
//! vowel onward. Lines sharing a key rhyme perfectly and share a scheme
//! letter; distinct keys with the same two final characters are reported as
//! near rhymes without joining the letter group.

use crate::models::{LineProsody, RhymeAnalysis, RhymeConnection, RhymeKind};
use crate::utils::words::clean_word;

/// Vowels used for rhyme keys. `y` is excluded so "day" keys on "ay"
/// rather than collapsing to a one-letter tail.
fn is_rhyme_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Extract the heuristic rhyme key of a word: the substring from its last
/// vowel through its end ("bright" -> "ight", "moon" -> "on"). Only the
/// final vowel opens the key, so a doubled vowel contributes one letter. A
/// word with no vowel falls back to its last two characters. Empty input
/// stays empty.
pub fn rhyme_sound(word: &str) -> String {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return String::new();
    }
    if let Some(pos) = cleaned.rfind(|c: char| is_rhyme_vowel(c)) {
        return cleaned[pos..].to_string();
    }
    // Vowelless words ("hmm", "tsk") fall back to the last two letters
    let start = cleaned.len().saturating_sub(2);
    cleaned[start..].to_string()
}

/// One letter group: a rhyme sound and the lines carrying it
struct RhymeGroup {
    sound: String,
    letter: char,
    members: Vec<usize>,
}

/// Assign scheme letters over an ordered list of per-line rhyme sounds.
///
/// The first occurrence of a sound takes the next unused letter (A, B, C,
/// ... wrapping after Z); repeats reuse the group's letter and connect back
/// to every earlier member. A new sound whose last two characters match an
/// existing group's sound also gains near connections into that group,
/// carrying the earlier group's letter. Empty sounds contribute nothing to
/// the scheme and get an empty letter slot.
pub fn detect_rhyme_scheme(sounds: &[String]) -> RhymeAnalysis {
    let mut groups: Vec<RhymeGroup> = Vec::new();
    let mut letters: Vec<String> = Vec::with_capacity(sounds.len());
    let mut scheme = String::new();
    let mut connections: Vec<RhymeConnection> = Vec::new();

    for (idx, sound) in sounds.iter().enumerate() {
        if sound.is_empty() {
            letters.push(String::new());
            continue;
        }

        if let Some(group) = groups.iter_mut().find(|g| g.sound == *sound) {
            for &earlier in &group.members {
                connections.push(RhymeConnection {
                    lines: [earlier, idx],
                    letter: group.letter.to_string(),
                    kind: RhymeKind::Perfect,
                });
            }
            group.members.push(idx);
            scheme.push(group.letter);
            letters.push(group.letter.to_string());
            continue;
        }

        // New sound: near-rhyme scan against existing groups, in order
        for group in &groups {
            if is_near_rhyme(sound, &group.sound) {
                for &earlier in &group.members {
                    connections.push(RhymeConnection {
                        lines: [earlier, idx],
                        letter: group.letter.to_string(),
                        kind: RhymeKind::Near,
                    });
                }
            }
        }

        let letter = scheme_letter(groups.len());
        groups.push(RhymeGroup {
            sound: sound.clone(),
            letter,
            members: vec![idx],
        });
        scheme.push(letter);
        letters.push(letter.to_string());
    }

    RhymeAnalysis {
        scheme,
        letters,
        connections,
    }
}

/// Detect the rhyme scheme over already-analyzed lines.
pub fn scheme_for_lines(lines: &[LineProsody]) -> RhymeAnalysis {
    let sounds: Vec<String> = lines.iter().map(|l| l.rhyme_sound.clone()).collect();
    detect_rhyme_scheme(&sounds)
}

/// Distinct sounds that share their final two characters
fn is_near_rhyme(a: &str, b: &str) -> bool {
    a != b && a.len() >= 2 && b.len() >= 2 && a[a.len() - 2..] == b[b.len() - 2..]
}

fn scheme_letter(group_index: usize) -> char {
    (b'A' + (group_index % 26) as u8) as char
}
