// Test cliché detection against the built-in and custom lexicons

use lyric_engine_wasm::analysis::detect_cliches;
use lyric_engine_wasm::models::Lexicon;

const SONG: &str = "[Verse 1]
You were meant to be mine
We loved against all odds

[Chorus]
My heart of gold broke down";

#[test]
fn test_finds_every_known_phrase_in_a_song() {
    let hits = detect_cliches(SONG, Lexicon::builtin());
    assert_eq!(hits.len(), 3);

    // Results come back in lexicon table order, not document order
    assert_eq!(hits[0].phrase, "against all odds");
    assert_eq!(hits[0].line_number, 3);
    assert_eq!(hits[1].phrase, "heart of gold");
    assert_eq!(hits[1].line_number, 6);
    assert_eq!(hits[2].phrase, "meant to be");
    assert_eq!(hits[2].line_number, 2);
}

#[test]
fn test_offsets_span_the_phrase() {
    let hits = detect_cliches(SONG, Lexicon::builtin());

    let odds = &hits[0];
    assert_eq!(odds.start_index, 9);
    assert_eq!(odds.end_index, 25);

    let gold = &hits[1];
    assert_eq!(gold.start_index, 3);
    assert_eq!(gold.end_index, 16);
}

#[test]
fn test_every_builtin_entry_offers_a_suggestion() {
    let hits = detect_cliches(SONG, Lexicon::builtin());
    assert_eq!(hits[0].suggestion, "with the deck stacked high");
    assert_eq!(hits[1].suggestion, "hands that give without counting");
    assert_eq!(hits[2].suggestion, "written in something older than us");

    for entry in &Lexicon::builtin().cliches {
        assert!(
            !entry.suggestion.is_empty(),
            "built-in phrase {:?} is missing a rewrite suggestion",
            entry.phrase
        );
    }
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    // The accented prefix is longer in bytes than in characters
    let hits = detect_cliches("Mi corazón, my heart on fire", Lexicon::builtin());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].start_index, 15);
    assert_eq!(hits[0].end_index, 28);
}

#[test]
fn test_detection_is_case_insensitive_both_ways() {
    let lexicon = Lexicon::new(&[], &[], &[("Heart On Fire", "a furnace in my chest")]);
    let hits = detect_cliches("my HEART on fire tonight", &lexicon);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phrase, "Heart On Fire");
    assert_eq!(hits[0].start_index, 3);
}

#[test]
fn test_lexicon_json_rejects_malformed_input() {
    assert!(Lexicon::from_json("{\"stableEndings\": 5}").is_err());
    assert!(Lexicon::from_json("not json at all").is_err());
}

#[test]
fn test_custom_table_replaces_builtin_phrases() {
    let lexicon = Lexicon::new(&[], &[], &[("broke down", "gave out")]);
    let hits = detect_cliches(SONG, &lexicon);

    // "heart of gold" is no longer in the table, "broke down" now is
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phrase, "broke down");
    assert_eq!(hits[0].line_number, 6);
}
