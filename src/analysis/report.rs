//! Section aggregation and the consolidated prosody report
//!
//! Ties the per-line measurements, rhyme detection and cliché scan together
//! into the single structure the editor requests per analysis pass.

use crate::analysis::cliches::detect_cliches;
use crate::analysis::lines::analyze_lines;
use crate::analysis::rhyme::scheme_for_lines;
use crate::models::{
    EndingType, Lexicon, LineProsody, ProsodyReport, Section, SectionAnalysis, Stability,
};
use crate::parse::sections::parse_sections;

/// Aggregate one section's content into its statistics.
pub fn analyze_section(section: &Section, lexicon: &Lexicon) -> SectionAnalysis {
    let lines = analyze_lines(&section.content, lexicon);
    let rhyme = scheme_for_lines(&lines);
    let counts: Vec<u32> = lines.iter().map(|l| l.syllable_count).collect();

    SectionAnalysis {
        name: section.name.clone(),
        line_count: lines.len(),
        rhyme_scheme: rhyme.scheme,
        stability: section_stability(&lines),
        average_syllables: mean(&counts),
        line_variance: variance(&counts),
    }
}

/// Run the full analysis pipeline over a lyric document.
///
/// Untagged text is treated as one implicit leading section; empty or
/// whitespace-only text yields an empty report.
pub fn analyze_prosody(text: &str, lexicon: &Lexicon) -> ProsodyReport {
    if text.trim().is_empty() {
        return ProsodyReport::default();
    }

    let lines = analyze_lines(text, lexicon);
    let mut sections = parse_sections(text);
    if sections.is_empty() {
        sections.push(implicit_section(text));
    }

    let section_analyses: Vec<SectionAnalysis> = sections
        .iter()
        .map(|section| analyze_section(section, lexicon))
        .collect();
    let rhyme = scheme_for_lines(&lines);

    log::debug!(
        "analyze_prosody: {} lines, {} sections, scheme {}",
        lines.len(),
        section_analyses.len(),
        rhyme.scheme
    );

    ProsodyReport {
        overall_stability: overall_stability(&lines),
        dominant_rhyme_scheme: rhyme.scheme,
        rhyme_connections: rhyme.connections,
        cliche_detections: detect_cliches(text, lexicon),
        sections: section_analyses,
        lines,
    }
}

/// Untagged documents analyze as a single unnamed opening section.
fn implicit_section(text: &str) -> Section {
    Section {
        name: "Intro".to_string(),
        start_line: 0,
        end_line: text.split('\n').count() - 1,
        content: text.trim().to_string(),
    }
}

/// Section verdict: unanimous endings decide, anything else is mixed.
fn section_stability(lines: &[LineProsody]) -> Stability {
    let (stable, unstable) = ending_counts(lines);
    if stable > 0 && unstable == 0 {
        Stability::Stable
    } else if unstable > 0 && stable == 0 {
        Stability::Unstable
    } else {
        Stability::Mixed
    }
}

/// Document verdict: majority vote, ties fall to mixed.
fn overall_stability(lines: &[LineProsody]) -> Stability {
    let (stable, unstable) = ending_counts(lines);
    if stable > unstable {
        Stability::Stable
    } else if unstable > stable {
        Stability::Unstable
    } else {
        Stability::Mixed
    }
}

fn ending_counts(lines: &[LineProsody]) -> (usize, usize) {
    let mut stable = 0;
    let mut unstable = 0;
    for line in lines {
        match line.ending_type {
            EndingType::Stable => stable += 1,
            EndingType::Unstable => unstable += 1,
            EndingType::Neutral => {}
        }
    }
    (stable, unstable)
}

fn mean(counts: &[u32]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().map(|&c| c as f64).sum::<f64>() / counts.len() as f64
}

/// Population variance of the per-line syllable counts
fn variance(counts: &[u32]) -> f64 {
    if counts.len() <= 1 {
        return 0.0;
    }
    let avg = mean(counts);
    counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / counts.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_empty_report() {
        let report = analyze_prosody("", Lexicon::builtin());
        assert!(report.lines.is_empty());
        assert!(report.sections.is_empty());
        assert_eq!(report.overall_stability, Stability::Mixed);
        assert_eq!(report.dominant_rhyme_scheme, "");

        let blank = analyze_prosody("  \n \t ", Lexicon::builtin());
        assert!(blank.sections.is_empty());
    }

    #[test]
    fn test_untagged_text_gets_implicit_section() {
        let report = analyze_prosody("walking through the night\nsinging to the light", Lexicon::builtin());
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].name, "Intro");
        assert_eq!(report.sections[0].line_count, 2);
    }

    #[test]
    fn test_section_stability_unanimous() {
        let text = "[Verse 1]\nwe danced all night\nunder the light";
        let report = analyze_prosody(text, Lexicon::builtin());
        assert_eq!(report.sections[0].stability, Stability::Stable);
    }

    #[test]
    fn test_section_stability_mixed() {
        // "night" is stable, "running" is unstable
        let text = "[Verse 1]\nwe danced all night\nwe kept on running";
        let report = analyze_prosody(text, Lexicon::builtin());
        assert_eq!(report.sections[0].stability, Stability::Mixed);
    }

    #[test]
    fn test_all_neutral_is_mixed() {
        let text = "[Verse 1]\na quiet song\nplayed far too long";
        let report = analyze_prosody(text, Lexicon::builtin());
        assert_eq!(report.sections[0].stability, Stability::Mixed);
        assert_eq!(report.overall_stability, Stability::Mixed);
    }

    #[test]
    fn test_overall_majority_vote() {
        // Two stable endings against one unstable: document reads stable
        let text = "night so bright\nburning light\nkeep on running";
        let report = analyze_prosody(text, Lexicon::builtin());
        assert_eq!(report.overall_stability, Stability::Stable);
    }

    #[test]
    fn test_average_and_variance() {
        // 4 and 6 syllables: mean 5, variance 1
        let text = "[Verse 1]\nhello happy\nhello happy happy";
        let report = analyze_prosody(text, Lexicon::builtin());
        let section = &report.sections[0];
        assert!((section.average_syllables - 5.0).abs() < 1e-9);
        assert!((section.line_variance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_line_variance_is_zero() {
        let report = analyze_prosody("[Verse 1]\none lonely line", Lexicon::builtin());
        assert_eq!(report.sections[0].line_variance, 0.0);
    }

    #[test]
    fn test_report_includes_cliches_and_connections() {
        let text = "[Chorus]\nMy heart on fire burns bright\nWe dance beneath the light";
        let report = analyze_prosody(text, Lexicon::builtin());
        assert_eq!(report.cliche_detections.len(), 1);
        assert_eq!(report.cliche_detections[0].line_number, 2);
        assert_eq!(report.dominant_rhyme_scheme, "AA");
        assert_eq!(report.rhyme_connections.len(), 1);
        assert_eq!(report.rhyme_connections[0].lines, [0, 1]);
    }
}
