//! Scoring Module - Pure dimension scoring and type resolution.
//!
//! Converts a set of answer records into per-axis scores and an aggregate
//! four-letter type. All functions are pure and stateless: no I/O, no
//! external state, deterministic for identical inputs.

mod axis_score;
mod engine;
mod type_result;

pub use axis_score::AxisScore;
pub use engine::{ScoringEngine, POINTS_PER_QUESTION};
pub use type_result::{TypeCode, TypeResult};
