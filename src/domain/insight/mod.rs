//! Insight Module - Blind-spot detection and journal analysis.
//!
//! Matches a resolved type against the static contradiction-pattern lexicon
//! to flag contradictions evidenced in free-text journal entries, and
//! derives emotion trends/statistics from entry scores. Stateless: every
//! detection run starts from scratch.

mod detector;
mod emotion;
mod journal;
mod lexicon;

pub use detector::{
    BlindSpotDetector, BlindSpotInsight, Severity, EXCERPT_CHARS, MAX_EVIDENCE,
};
pub use emotion::{EmotionStats, EmotionTrend};
pub use journal::{EmotionScore, JournalEntry};
pub use lexicon::{
    challenges_for, strengths_for, strengths_for_pole, vulnerabilities_for_pole,
    ContradictionPattern, CONTRADICTION_PATTERNS,
};
