//! Diagnostic question records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Axis;

/// Unique identifier for a diagnostic question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u16);

impl QuestionId {
    /// Creates a QuestionId from a raw number.
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw number.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which pole a high raw answer favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// High score counts toward the first pole (E, S, T, J).
    FirstPole,
    /// High score counts toward the second pole (I, N, F, P).
    SecondPole,
}

/// An immutable diagnostic question.
///
/// Questions are defined once in the static catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// The axis this question measures.
    pub axis: Axis,
    /// Whether a high answer favors the axis's first or second pole.
    pub polarity: Polarity,
}

impl Question {
    /// Creates a new question.
    pub fn new(id: u16, text: impl Into<String>, axis: Axis, polarity: Polarity) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            axis,
            polarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_new_assigns_fields() {
        let q = Question::new(
            7,
            "Enjoys group activities and teamwork",
            Axis::ExtraversionIntroversion,
            Polarity::FirstPole,
        );
        assert_eq!(q.id.value(), 7);
        assert_eq!(q.axis, Axis::ExtraversionIntroversion);
        assert_eq!(q.polarity, Polarity::FirstPole);
    }

    #[test]
    fn question_id_serializes_transparently() {
        let id = QuestionId::new(12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
    }

    #[test]
    fn polarity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Polarity::FirstPole).unwrap(),
            "\"first_pole\""
        );
        assert_eq!(
            serde_json::to_string(&Polarity::SecondPole).unwrap(),
            "\"second_pole\""
        );
    }
}
