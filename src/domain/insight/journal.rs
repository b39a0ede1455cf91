//! Journal entry views consumed read-only by the detector.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Emotion intensity recorded with a journal entry: 1 (lowest) to 10 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScore(u8);

impl EmotionScore {
    /// Creates an EmotionScore, returning error if outside 1..=10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "emotion score",
                1.0,
                10.0,
                value as f64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value (1-10).
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for EmotionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A free-text journal entry.
///
/// The core never mutates or persists entries; it only scans `content` for
/// keyword occurrences, reads `date` for evidence prefixes, and reads
/// `emotion` for the trend analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
    pub date: Timestamp,
    pub tags: Vec<String>,
    pub emotion: EmotionScore,
}

impl JournalEntry {
    /// Creates a journal entry, rejecting empty content.
    pub fn new(
        content: impl Into<String>,
        date: Timestamp,
        tags: Vec<String>,
        emotion: EmotionScore,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            content,
            date,
            tags,
            emotion,
        })
    }
}
