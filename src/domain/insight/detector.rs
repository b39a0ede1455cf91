//! Blind-spot detection over journal text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::scoring::TypeResult;

use super::journal::JournalEntry;
use super::lexicon::{ContradictionPattern, CONTRADICTION_PATTERNS};

/// Maximum number of evidence excerpts per insight.
pub const MAX_EVIDENCE: usize = 3;

/// Maximum excerpt length in characters, before the ellipsis marker.
pub const EXCERPT_CHARS: usize = 50;

/// How strongly the journal evidence contradicts the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A single trigger keyword matched.
    Low,
    /// Two or more distinct trigger keywords matched.
    Medium,
}

/// A detected contradiction between a resolved type and journal evidence.
///
/// Ephemeral output: regenerated on every detection run, never persisted
/// by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindSpotInsight {
    pub category: String,
    pub description: String,
    /// Up to [`MAX_EVIDENCE`] dated journal excerpts.
    pub evidence: Vec<String>,
    pub recommendation: String,
    pub severity: Severity,
}

/// Stateless matcher of contradiction patterns against journal text.
///
/// Matching is literal substring search: no tokenization, stemming, or
/// fuzzy matching. Upgrading it would change observable behavior.
pub struct BlindSpotDetector;

impl BlindSpotDetector {
    /// Detects blind spots for a resolved type across a set of journal entries.
    ///
    /// Patterns whose pole is not one of the type's four letters never fire,
    /// regardless of text content. Insights are emitted in the static
    /// pattern-table order; each pattern produces at most one insight per
    /// run. An empty journal set yields an empty list.
    pub fn detect_blind_spots(
        type_result: &TypeResult,
        entries: &[JournalEntry],
    ) -> Vec<BlindSpotInsight> {
        if entries.is_empty() {
            return Vec::new();
        }

        debug!(
            type_code = %type_result.type_code,
            entries = entries.len(),
            "Detecting blind spots"
        );

        let corpus = entries
            .iter()
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        CONTRADICTION_PATTERNS
            .iter()
            .filter(|pattern| type_result.type_code.contains_pole(pattern.pole))
            .filter_map(|pattern| Self::check_pattern(pattern, &corpus, entries))
            .collect()
    }

    fn check_pattern(
        pattern: &ContradictionPattern,
        corpus: &str,
        entries: &[JournalEntry],
    ) -> Option<BlindSpotInsight> {
        let matched: Vec<&str> = pattern
            .keywords
            .iter()
            .copied()
            .filter(|kw| corpus.contains(kw))
            .collect();

        if matched.is_empty() {
            return None;
        }

        let evidence = Self::collect_evidence(entries, &matched);

        let severity = if matched.len() >= 2 {
            Severity::Medium
        } else {
            Severity::Low
        };

        Some(BlindSpotInsight {
            category: format!("{} type blind spot", pattern.pole.letter()),
            description: pattern.insight.to_string(),
            evidence,
            recommendation: pattern.recommendation.to_string(),
            severity,
        })
    }

    /// Takes at most [`MAX_EVIDENCE`] entries containing any matched keyword,
    /// each as a dated excerpt.
    fn collect_evidence(entries: &[JournalEntry], matched: &[&str]) -> Vec<String> {
        entries
            .iter()
            .filter(|entry| matched.iter().any(|kw| entry.content.contains(kw)))
            .take(MAX_EVIDENCE)
            .map(|entry| format!("[{}] {}", entry.date.date_string(), excerpt(&entry.content)))
            .collect()
    }
}

/// First [`EXCERPT_CHARS`] characters, with an ellipsis marker when truncated.
///
/// Counted in characters, not bytes, so multi-byte text never splits a
/// code point.
fn excerpt(content: &str) -> String {
    if content.chars().count() > EXCERPT_CHARS {
        let head: String = content.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::insight::journal::EmotionScore;
    use crate::domain::questionnaire::Axis;
    use crate::domain::scoring::AxisScore;

    fn entry(content: &str) -> JournalEntry {
        JournalEntry::new(
            content,
            Timestamp::from_unix_secs(1705276800),
            vec![],
            EmotionScore::try_new(5).unwrap(),
        )
        .unwrap()
    }

    /// Builds a TypeResult whose dominant poles spell the given letters,
    /// with `true` meaning the axis's first pole.
    fn type_result(first_pole_wins: [bool; 4]) -> TypeResult {
        let scores = [
            score(Axis::ExtraversionIntroversion, first_pole_wins[0]),
            score(Axis::SensingIntuition, first_pole_wins[1]),
            score(Axis::ThinkingFeeling, first_pole_wins[2]),
            score(Axis::JudgingPerceiving, first_pole_wins[3]),
        ];
        TypeResult::new(UserId::new(), scores, Timestamp::from_unix_secs(0))
    }

    fn score(axis: Axis, first_wins: bool) -> AxisScore {
        if first_wins {
            AxisScore::from_totals(axis, 20.0, 12.0)
        } else {
            AxisScore::from_totals(axis, 12.0, 20.0)
        }
    }

    #[test]
    fn empty_journal_yields_no_insights() {
        let result = type_result([false, false, false, false]); // INFP
        assert!(BlindSpotDetector::detect_blind_spots(&result, &[]).is_empty());
    }

    #[test]
    fn pattern_fires_for_matching_pole_and_keyword() {
        // ENFP contains P; the planning-stress pattern should fire.
        let result = type_result([true, false, false, false]);
        let entries = vec![entry("Today everything didn't go as planned at work")];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].category, "P type blind spot");
        assert_eq!(insights[0].severity, Severity::Low);
        assert_eq!(insights[0].evidence.len(), 1);
        assert!(insights[0].evidence[0].starts_with("[2024-01-15] "));
    }

    #[test]
    fn pattern_never_fires_for_absent_pole() {
        // ENFP does not contain I, S, T, or J: stuffing the journal with
        // those patterns' keywords must produce nothing.
        let result = type_result([true, false, false, false]);
        assert_eq!(result.type_code.code(), "ENFP");

        let entries = vec![entry(
            "lonely and wished I had talked more; got emotional with anger; \
             more freedom would help; feel boxed in",
        )];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        for insight in &insights {
            assert!(
                insight.category.starts_with("E ")
                    || insight.category.starts_with("N ")
                    || insight.category.starts_with("F ")
                    || insight.category.starts_with("P "),
                "unexpected insight category {}",
                insight.category
            );
        }
        assert!(!insights
            .iter()
            .any(|i| i.category == "I type blind spot"
                || i.category == "T type blind spot"
                || i.category == "J type blind spot"));
    }

    #[test]
    fn two_distinct_keywords_raise_severity_to_medium() {
        let result = type_result([true, false, false, false]); // ENFP
        let entries = vec![
            entry("the schedule fell apart again"),
            entry("so frustrated about the morning"),
        ];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, Severity::Medium);
        assert_eq!(insights[0].evidence.len(), 2);
    }

    #[test]
    fn evidence_is_capped_at_three_entries() {
        let result = type_result([true, false, false, false]); // ENFP
        let entries: Vec<JournalEntry> = (0..5)
            .map(|i| entry(&format!("day {}: frustrated by the commute", i)))
            .collect();

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].evidence.len(), MAX_EVIDENCE);
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let result = type_result([true, false, false, false]); // ENFP
        let long_tail = "x".repeat(80);
        let entries = vec![entry(&format!("frustrated because {}", long_tail))];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);
        let evidence = &insights[0].evidence[0];

        let excerpt_part = evidence.strip_prefix("[2024-01-15] ").unwrap();
        assert!(excerpt_part.ends_with("..."));
        assert_eq!(excerpt_part.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn short_content_is_not_truncated() {
        let result = type_result([true, false, false, false]); // ENFP
        let entries = vec![entry("frustrated")];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);
        assert_eq!(insights[0].evidence[0], "[2024-01-15] frustrated");
    }

    #[test]
    fn insights_follow_pattern_table_order() {
        // ESTJ matches the J, T, and E patterns; insight order must follow
        // the static table (J before T before E).
        let result = type_result([true, true, true, true]);
        assert_eq!(result.type_code.code(), "ESTJ");

        let entries = vec![entry(
            "feel boxed in lately, got emotional at standup, and now I just \
             want to be alone",
        )];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        let categories: Vec<&str> = insights.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "J type blind spot",
                "T type blind spot",
                "E type blind spot"
            ]
        );
    }

    #[test]
    fn keyword_synthesized_across_entry_boundary_fires_without_evidence() {
        // The corpus joins entries with a single space, so a phrase split
        // exactly at an entry boundary still matches the corpus even though
        // no individual entry contains it. The pattern fires but evidence
        // collection, which scans entries one by one, finds nothing.
        // Compatibility behavior inherited from the original corpus join.
        let result = type_result([true, false, false, false]); // ENFP
        let entries = vec![entry("didn't go as"), entry("planned")];

        let insights = BlindSpotDetector::detect_blind_spots(&result, &entries);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, Severity::Low);
        assert!(insights[0].evidence.is_empty());
    }
}
