//! Syllable counting
//!
//! Vowel-group heuristic, not a dictionary syllabifier: count transitions
//! into a vowel run, then correct for a trailing silent `e`. Accurate enough
//! for line-length feedback, and deliberately cheap per keystroke.

use crate::utils::words::clean_word;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count syllables in a single word.
///
/// Words of three letters or fewer count as one syllable. Longer words
/// count vowel groups over {a, e, i, o, u, y}, dropping one for a trailing
/// silent `e`, with a floor of one. Input with no letters counts zero.
pub fn count_syllables(word: &str) -> u32 {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return 0;
    }
    if cleaned.len() <= 3 {
        return 1;
    }

    let mut count: u32 = 0;
    let mut prev_was_vowel = false;
    for c in cleaned.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }

    // Trailing silent e: "believe" has two spoken syllables, not three
    if cleaned.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Count syllables across every whitespace-separated word of a line.
pub fn count_line_syllables(line: &str) -> u32 {
    line.split_whitespace().map(count_syllables).sum()
}
