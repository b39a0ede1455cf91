//! Answer value object for Likert responses (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A Likert questionnaire response: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerValue(u8);

impl AnswerValue {
    /// Lowest possible response.
    pub const MIN: Self = Self(1);

    /// Highest possible response.
    pub const MAX: Self = Self(5);

    /// Creates an AnswerValue, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "answer score",
                1.0,
                5.0,
                value as f64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value (1-5).
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value rescaled to the 0-4 accumulation range.
    pub fn normalized(&self) -> u8 {
        self.0 - 1
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
