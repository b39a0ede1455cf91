//! Domain layer containing the scoring and reconciliation core.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Axes, questions, answers, and the frozen catalog
//! - `scoring` - Dimension scoring and four-letter type resolution
//! - `insight` - Blind-spot detection and journal emotion analysis
//! - `drift` - Reconciliation of diagnostic scores with external estimates

pub mod drift;
pub mod foundation;
pub mod insight;
pub mod questionnaire;
pub mod scoring;
