//! Axis drift reconciliation between diagnostic scores and external estimates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::questionnaire::{Axis, Pole};
use crate::domain::scoring::AxisScore;

/// Absolute difference beyond which drift is flagged as notable.
pub const NOTABLE_THRESHOLD: f64 = 0.2;

/// Neutral estimate used when an axis is absent from the mapping.
pub const NEUTRAL_ESTIMATE: f64 = 0.5;

/// Externally estimated axis positions (0.0 = first pole, 1.0 = second pole).
///
/// Produced by an out-of-scope analysis process and consumed opaquely.
/// Missing axes read as the neutral 0.5 ("no external evidence yet"), not
/// an error. Values are clamped to [0, 1] on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisEstimates {
    estimates: BTreeMap<Axis, f64>,
}

impl AxisEstimates {
    /// Creates an empty mapping (every axis reads as neutral).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the estimate for an axis, clamped to [0, 1].
    pub fn insert(&mut self, axis: Axis, estimate: f64) {
        self.estimates.insert(axis, estimate.clamp(0.0, 1.0));
    }

    /// Returns the estimate for an axis, if present.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.estimates.get(&axis).copied()
    }

    /// Returns the estimate for an axis, defaulting to neutral when absent.
    pub fn get_or_neutral(&self, axis: Axis) -> f64 {
        self.get(axis).unwrap_or(NEUTRAL_ESTIMATE)
    }

    /// Returns true if no axis has an estimate.
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl FromIterator<(Axis, f64)> for AxisEstimates {
    fn from_iter<I: IntoIterator<Item = (Axis, f64)>>(iter: I) -> Self {
        let mut estimates = Self::new();
        for (axis, value) in iter {
            estimates.insert(axis, value);
        }
        estimates
    }
}

/// Divergence between the static diagnostic position and the external
/// estimate for one axis.
///
/// Ephemeral output, recomputed per report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDriftSignal {
    pub axis: Axis,
    /// Diagnostic position on the 0-1 scale (0 = first pole extreme).
    pub diagnostic_position: f64,
    /// External estimate, neutral 0.5 when absent.
    pub estimated_position: f64,
    /// `estimated_position − diagnostic_position`.
    pub difference: f64,
    /// True when the absolute difference exceeds [`NOTABLE_THRESHOLD`].
    pub notable: bool,
    /// The pole recent behavior leans toward; only set when notable.
    pub favored_pole: Option<Pole>,
}

/// Stateless comparison of diagnostic scores against external estimates.
pub struct DriftReconciler;

impl DriftReconciler {
    /// Maps an axis score onto the continuous 0-1 scale.
    ///
    /// 0.0 is the first pole's extreme, 1.0 the second's. Strength 0 always
    /// lands exactly on 0.5, regardless of which pole is nominally dominant
    /// (the tie-break never moves the position).
    pub fn axis_position(score: &AxisScore) -> f64 {
        let offset = score.strength.value() / 200.0;
        if score.first_pole_dominates() {
            0.5 - offset
        } else {
            0.5 + offset
        }
    }

    /// Compares the diagnostic position for one axis against the external
    /// estimate.
    ///
    /// The estimate defaults to neutral 0.5 when the axis is absent from
    /// the mapping. When the difference is notable, the favored pole is the
    /// second pole for positive differences and the first pole otherwise.
    pub fn compute_drift(score: &AxisScore, estimates: &AxisEstimates) -> AxisDriftSignal {
        let diagnostic_position = Self::axis_position(score);
        let estimated_position = estimates.get_or_neutral(score.axis);
        let difference = estimated_position - diagnostic_position;
        let notable = difference.abs() > NOTABLE_THRESHOLD;

        let favored_pole = notable.then(|| {
            if difference > 0.0 {
                score.second_pole
            } else {
                score.first_pole
            }
        });

        AxisDriftSignal {
            axis: score.axis,
            diagnostic_position,
            estimated_position,
            difference,
            notable,
            favored_pole,
        }
    }
}
