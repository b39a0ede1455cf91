//! Per-axis drift roll-up for a full diagnostic report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::UserId;
use crate::domain::scoring::TypeResult;

use super::reconciler::{AxisDriftSignal, AxisEstimates, DriftReconciler};

/// Drift signals for all four axes of one user's diagnosis.
///
/// Runs the reconciler once per axis in canonical order; no further
/// aggregation happens across axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub user_id: UserId,
    /// One signal per axis, in canonical axis order.
    pub signals: [AxisDriftSignal; 4],
}

impl DriftReport {
    /// Computes drift signals across all four axes of a type result.
    pub fn compute(type_result: &TypeResult, estimates: &AxisEstimates) -> Self {
        debug!(
            user_id = %type_result.user_id,
            type_code = %type_result.type_code,
            "Computing drift report"
        );

        let scores = &type_result.axis_scores;
        let signals = [
            DriftReconciler::compute_drift(&scores[0], estimates),
            DriftReconciler::compute_drift(&scores[1], estimates),
            DriftReconciler::compute_drift(&scores[2], estimates),
            DriftReconciler::compute_drift(&scores[3], estimates),
        ];

        Self {
            user_id: type_result.user_id,
            signals,
        }
    }

    /// Returns the signals whose drift crossed the notable threshold.
    pub fn notable_signals(&self) -> Vec<&AxisDriftSignal> {
        self.signals.iter().filter(|s| s.notable).collect()
    }
}
