//! Per-axis score derived from questionnaire answers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Strength;
use crate::domain::questionnaire::{Axis, Pole};

/// The scored outcome of one axis for one scoring run.
///
/// Holds both pole labels, the two accumulated raw totals, the resolved
/// dominant pole, and the normalized dominance strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub first_pole: Pole,
    pub second_pole: Pole,
    pub first_total: f64,
    pub second_total: f64,
    pub dominant: Pole,
    pub strength: Strength,
}

impl AxisScore {
    /// Builds an AxisScore from accumulated pole totals.
    ///
    /// Strength is `|first − second| / (first + second) × 100`, 0 when the
    /// totals sum to zero. The dominant pole is the first pole whenever its
    /// total is greater than or equal to the second's; ties (and the empty
    /// case) resolve to the first pole. This mirrors the legacy `>=`
    /// comparison and is preserved for output compatibility.
    pub fn from_totals(axis: Axis, first_total: f64, second_total: f64) -> Self {
        let (first_pole, second_pole) = axis.poles();

        let total = first_total + second_total;
        let strength = if total > 0.0 {
            Strength::new((first_total - second_total).abs() / total * 100.0)
        } else {
            Strength::ZERO
        };

        let dominant = if first_total >= second_total {
            first_pole
        } else {
            second_pole
        };

        Self {
            axis,
            first_pole,
            second_pole,
            first_total,
            second_total,
            dominant,
            strength,
        }
    }

    /// Returns true if the dominant pole is the axis's first pole.
    pub fn first_pole_dominates(&self) -> bool {
        self.dominant == self.first_pole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_totals_computes_strength() {
        let score = AxisScore::from_totals(Axis::ExtraversionIntroversion, 24.0, 8.0);
        assert_eq!(score.strength.value(), 50.0);
        assert_eq!(score.dominant, Pole::E);
    }

    #[test]
    fn from_totals_second_pole_dominates_on_strict_majority() {
        let score = AxisScore::from_totals(Axis::ThinkingFeeling, 10.0, 22.0);
        assert_eq!(score.dominant, Pole::F);
        assert!(!score.first_pole_dominates());
        assert_eq!(score.strength.value(), 37.5);
    }

    #[test]
    fn zero_totals_default_to_first_pole() {
        // Legacy artifact pinned deliberately: an unanswered axis resolves
        // to the first pole with zero strength.
        let score = AxisScore::from_totals(Axis::JudgingPerceiving, 0.0, 0.0);
        assert_eq!(score.dominant, Pole::J);
        assert_eq!(score.strength, Strength::ZERO);
    }

    #[test]
    fn balanced_totals_resolve_to_first_pole() {
        let score = AxisScore::from_totals(Axis::SensingIntuition, 16.0, 16.0);
        assert_eq!(score.dominant, Pole::S);
        assert!(score.strength.is_balanced());
    }

    #[test]
    fn pole_labels_come_from_axis() {
        let score = AxisScore::from_totals(Axis::SensingIntuition, 1.0, 3.0);
        assert_eq!(score.first_pole, Pole::S);
        assert_eq!(score.second_pole, Pole::N);
    }
}
