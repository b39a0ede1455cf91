//! Typelens - Personality questionnaire scoring and journal reconciliation.
//!
//! This crate implements the scoring core of a personality diagnostic:
//! deterministic dimension scores from questionnaire answers, four-letter
//! type resolution, pattern-based blind-spot detection over journal text,
//! and the axis-drift comparison that reconciles a static diagnosis with an
//! externally estimated axis position.
//!
//! The core is pure and synchronous: no I/O, no shared mutable state, and
//! identical inputs always yield identical outputs. Storage, rendering,
//! authentication, and the AI estimation process are external collaborators
//! that pass plain data in and out.

pub mod domain;

pub use domain::drift::{AxisDriftSignal, AxisEstimates, DriftReconciler, DriftReport};
pub use domain::foundation::{AnswerValue, Strength, Timestamp, UserId, ValidationError};
pub use domain::insight::{
    BlindSpotDetector, BlindSpotInsight, EmotionScore, EmotionStats, EmotionTrend,
    JournalEntry, Severity,
};
pub use domain::questionnaire::{
    diagnostic_catalog, Answer, Axis, Polarity, Pole, Question, QuestionCatalog, QuestionId,
};
pub use domain::scoring::{AxisScore, ScoringEngine, TypeCode, TypeResult};
