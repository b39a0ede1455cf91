//! Four-letter type code and the full diagnostic result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::questionnaire::{Axis, Pole};

use super::AxisScore;

/// The four dominant poles in canonical axis order (EI, SN, TF, JP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeCode {
    poles: [Pole; 4],
}

impl TypeCode {
    /// Creates a type code from the four dominant poles in canonical order.
    pub fn new(poles: [Pole; 4]) -> Self {
        Self { poles }
    }

    /// Returns the dominant pole for each axis, in canonical order.
    pub fn poles(&self) -> [Pole; 4] {
        self.poles
    }

    /// Returns the dominant pole resolved for a given axis.
    pub fn pole_for(&self, axis: Axis) -> Pole {
        self.poles[axis.order_index()]
    }

    /// Returns true if the given pole is one of the four letters.
    pub fn contains_pole(&self, pole: Pole) -> bool {
        self.poles.contains(&pole)
    }

    /// Returns the four-letter code, e.g. "INTJ".
    pub fn code(&self) -> String {
        self.poles.iter().map(|p| p.letter()).collect()
    }

    /// Returns the well-known nickname for the sixteen types.
    pub fn description(&self) -> &'static str {
        match self.code().as_str() {
            "INTJ" => "Architect",
            "INTP" => "Logician",
            "ENTJ" => "Commander",
            "ENTP" => "Debater",
            "INFJ" => "Advocate",
            "INFP" => "Mediator",
            "ENFJ" => "Protagonist",
            "ENFP" => "Campaigner",
            "ISTJ" => "Logistician",
            "ISFJ" => "Defender",
            "ESTJ" => "Executive",
            "ESFJ" => "Consul",
            "ISTP" => "Virtuoso",
            "ISFP" => "Adventurer",
            "ESTP" => "Entrepreneur",
            "ESFP" => "Entertainer",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The complete result of one questionnaire submission.
///
/// Immutable once created; a later submission produces a new TypeResult
/// rather than updating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeResult {
    pub user_id: UserId,
    pub type_code: TypeCode,
    /// One score per axis, in canonical axis order.
    pub axis_scores: [AxisScore; 4],
    pub diagnosed_at: Timestamp,
}

impl TypeResult {
    /// Creates a new result from the four axis scores in canonical order.
    pub fn new(user_id: UserId, axis_scores: [AxisScore; 4], diagnosed_at: Timestamp) -> Self {
        let poles = [
            axis_scores[0].dominant,
            axis_scores[1].dominant,
            axis_scores[2].dominant,
            axis_scores[3].dominant,
        ];
        Self {
            user_id,
            type_code: TypeCode::new(poles),
            axis_scores,
            diagnosed_at,
        }
    }

    /// Returns the score for a given axis.
    pub fn score_for(&self, axis: Axis) -> &AxisScore {
        &self.axis_scores[axis.order_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(letters: [Pole; 4]) -> TypeCode {
        TypeCode::new(letters)
    }

    #[test]
    fn type_code_concatenates_letters() {
        let tc = code([Pole::I, Pole::N, Pole::T, Pole::J]);
        assert_eq!(tc.code(), "INTJ");
        assert_eq!(format!("{}", tc), "INTJ");
    }

    #[test]
    fn type_code_contains_pole() {
        let tc = code([Pole::E, Pole::N, Pole::F, Pole::P]);
        assert!(tc.contains_pole(Pole::E));
        assert!(tc.contains_pole(Pole::P));
        assert!(!tc.contains_pole(Pole::I));
        assert!(!tc.contains_pole(Pole::J));
    }

    #[test]
    fn type_code_pole_for_axis() {
        let tc = code([Pole::E, Pole::S, Pole::F, Pole::J]);
        assert_eq!(tc.pole_for(Axis::ExtraversionIntroversion), Pole::E);
        assert_eq!(tc.pole_for(Axis::ThinkingFeeling), Pole::F);
    }

    #[test]
    fn type_code_descriptions_cover_all_sixteen_types() {
        let firsts = [Pole::E, Pole::I];
        let seconds = [Pole::S, Pole::N];
        let thirds = [Pole::T, Pole::F];
        let fourths = [Pole::J, Pole::P];

        for a in firsts {
            for b in seconds {
                for c in thirds {
                    for d in fourths {
                        let tc = code([a, b, c, d]);
                        assert_ne!(tc.description(), "Unknown", "no nickname for {}", tc);
                    }
                }
            }
        }
    }

    #[test]
    fn type_result_derives_code_from_scores() {
        let scores = [
            AxisScore::from_totals(Axis::ExtraversionIntroversion, 4.0, 12.0),
            AxisScore::from_totals(Axis::SensingIntuition, 2.0, 14.0),
            AxisScore::from_totals(Axis::ThinkingFeeling, 14.0, 2.0),
            AxisScore::from_totals(Axis::JudgingPerceiving, 12.0, 4.0),
        ];
        let result = TypeResult::new(UserId::new(), scores, Timestamp::from_unix_secs(0));

        assert_eq!(result.type_code.code(), "INTJ");
        assert_eq!(result.type_code.description(), "Architect");
        assert_eq!(
            result.score_for(Axis::SensingIntuition).dominant,
            Pole::N
        );
    }
}
