//! Strength value object (0.0-100.0 dominance percentage).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How decisively one pole of an axis dominates the other, as a percentage.
///
/// 0 means the two pole totals were perfectly balanced (or no questions were
/// answered); 100 means every answered point landed on one pole.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strength(f64);

impl Strength {
    /// Perfectly balanced poles.
    pub const ZERO: Self = Self(0.0);

    /// Fully one-sided.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Strength, clamping to the valid range.
    ///
    /// NaN clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Strength, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("strength", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64 (full precision).
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Returns true if the poles were perfectly balanced.
    pub fn is_balanced(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
