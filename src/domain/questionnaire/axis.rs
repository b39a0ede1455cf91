//! Axis and Pole enums representing the four bipolar personality dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The four fixed bipolar dimensions, in canonical order.
///
/// Each axis has a first pole (E, S, T, J) and a second pole (I, N, F, P).
/// The set is closed: axes are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion (E) vs Introversion (I).
    #[serde(rename = "EI")]
    ExtraversionIntroversion,
    /// Sensing (S) vs Intuition (N).
    #[serde(rename = "SN")]
    SensingIntuition,
    /// Thinking (T) vs Feeling (F).
    #[serde(rename = "TF")]
    ThinkingFeeling,
    /// Judging (J) vs Perceiving (P).
    #[serde(rename = "JP")]
    JudgingPerceiving,
}

impl Axis {
    /// All four axes in canonical order (EI, SN, TF, JP).
    ///
    /// Type codes are assembled by iterating this order.
    pub const ALL: [Axis; 4] = [
        Axis::ExtraversionIntroversion,
        Axis::SensingIntuition,
        Axis::ThinkingFeeling,
        Axis::JudgingPerceiving,
    ];

    /// Returns the two-letter axis code.
    pub fn code(&self) -> &'static str {
        match self {
            Axis::ExtraversionIntroversion => "EI",
            Axis::SensingIntuition => "SN",
            Axis::ThinkingFeeling => "TF",
            Axis::JudgingPerceiving => "JP",
        }
    }

    /// Returns the pole a positive-polarity question favors (E, S, T, J).
    pub fn first_pole(&self) -> Pole {
        match self {
            Axis::ExtraversionIntroversion => Pole::E,
            Axis::SensingIntuition => Pole::S,
            Axis::ThinkingFeeling => Pole::T,
            Axis::JudgingPerceiving => Pole::J,
        }
    }

    /// Returns the opposing pole (I, N, F, P).
    pub fn second_pole(&self) -> Pole {
        match self {
            Axis::ExtraversionIntroversion => Pole::I,
            Axis::SensingIntuition => Pole::N,
            Axis::ThinkingFeeling => Pole::F,
            Axis::JudgingPerceiving => Pole::P,
        }
    }

    /// Returns both poles as (first, second).
    pub fn poles(&self) -> (Pole, Pole) {
        (self.first_pole(), self.second_pole())
    }

    /// Returns the 0-based index of this axis in canonical order.
    pub fn order_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|a| a == self)
            .expect("Axis must be in ALL array")
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Axis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EI" => Ok(Axis::ExtraversionIntroversion),
            "SN" => Ok(Axis::SensingIntuition),
            "TF" => Ok(Axis::ThinkingFeeling),
            "JP" => Ok(Axis::JudgingPerceiving),
            other => Err(ValidationError::unknown_axis(other)),
        }
    }
}

/// One of the eight pole labels across the four axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    /// Returns the single-letter label.
    pub fn letter(&self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::S => 'S',
            Pole::N => 'N',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::J => 'J',
            Pole::P => 'P',
        }
    }

    /// Returns the axis this pole belongs to.
    pub fn axis(&self) -> Axis {
        match self {
            Pole::E | Pole::I => Axis::ExtraversionIntroversion,
            Pole::S | Pole::N => Axis::SensingIntuition,
            Pole::T | Pole::F => Axis::ThinkingFeeling,
            Pole::J | Pole::P => Axis::JudgingPerceiving,
        }
    }

    /// Returns true if this is the first pole of its axis (E, S, T, J).
    pub fn is_first(&self) -> bool {
        self.axis().first_pole() == *self
    }

    /// Returns the opposing pole of the same axis.
    pub fn opposite(&self) -> Pole {
        let (first, second) = self.axis().poles();
        if self.is_first() {
            second
        } else {
            first
        }
    }

    /// Returns a short description of what the pole means.
    pub fn description(&self) -> &'static str {
        match self {
            Pole::E => {
                "Extraverted: gains energy from interaction, sociable, \
                 tends to think out loud"
            }
            Pole::I => {
                "Introverted: gains energy from time alone, reflects before \
                 acting, prefers a few deep relationships"
            }
            Pole::S => {
                "Sensing: values concrete facts and details, prefers a \
                 realistic, hands-on approach"
            }
            Pole::N => {
                "Intuitive: values possibilities and patterns, drawn to \
                 abstract ideas and future vision"
            }
            Pole::T => {
                "Thinking: decides through logic and objectivity, values \
                 fairness and efficiency"
            }
            Pole::F => {
                "Feeling: decides through values and relationships, values \
                 harmony and empathy"
            }
            Pole::J => {
                "Judging: prefers plans and order, finds comfort in reaching \
                 decisions"
            }
            Pole::P => {
                "Perceiving: prefers flexibility and adaptation, likes to \
                 keep options open"
            }
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
