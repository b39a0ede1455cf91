//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Typelens domain.

mod answer_value;
mod errors;
mod ids;
mod strength;
mod timestamp;

pub use answer_value::AnswerValue;
pub use errors::ValidationError;
pub use ids::UserId;
pub use strength::Strength;
pub use timestamp::Timestamp;
