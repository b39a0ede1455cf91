//! Drift Module - Reconciling diagnostic scores with external estimates.
//!
//! Converts both the static dimension score and the externally supplied
//! (AI-estimated) axis value onto one continuous 0-1 scale per axis and
//! reports the divergence. Pure, order-independent comparisons.

mod reconciler;
mod report;

pub use reconciler::{
    AxisDriftSignal, AxisEstimates, DriftReconciler, NEUTRAL_ESTIMATE, NOTABLE_THRESHOLD,
};
pub use report::DriftReport;
