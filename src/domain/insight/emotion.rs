//! Emotion trend and statistics over journal entries.

use serde::{Deserialize, Serialize};

use super::journal::JournalEntry;

/// Half-average difference beyond which the trend counts as rising/declining.
const TREND_THRESHOLD: f64 = 1.0;

/// Population variance beyond which a flat trend counts as volatile.
const VOLATILITY_THRESHOLD: f64 = 4.0;

/// Direction of emotion scores across an ordered set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTrend {
    /// Second half averages more than one point above the first.
    Rising,
    /// Second half averages more than one point below the first.
    Declining,
    /// Flat halves but high day-to-day variance.
    Volatile,
    /// Flat halves and low variance.
    Stable,
    /// Fewer than two entries.
    InsufficientData,
}

impl EmotionTrend {
    /// Analyzes the trend of emotion scores across entries, in order.
    ///
    /// Splits the scores at the midpoint and compares the half averages;
    /// when the difference is within the threshold, variance decides
    /// between [`EmotionTrend::Volatile`] and [`EmotionTrend::Stable`].
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let scores: Vec<f64> = entries
            .iter()
            .map(|e| f64::from(e.emotion.value()))
            .collect();

        if scores.len() < 2 {
            return EmotionTrend::InsufficientData;
        }

        let mid = scores.len() / 2;
        let first_half_avg = scores[..mid].iter().sum::<f64>() / mid as f64;
        let second_half_avg =
            scores[mid..].iter().sum::<f64>() / (scores.len() - mid) as f64;

        let diff = second_half_avg - first_half_avg;
        if diff > TREND_THRESHOLD {
            return EmotionTrend::Rising;
        }
        if diff < -TREND_THRESHOLD {
            return EmotionTrend::Declining;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let variance = scores
            .iter()
            .map(|s| (s - mean).powi(2))
            .sum::<f64>()
            / scores.len() as f64;

        if variance > VOLATILITY_THRESHOLD {
            EmotionTrend::Volatile
        } else {
            EmotionTrend::Stable
        }
    }
}

/// Summary statistics over the emotion scores of a journal set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionStats {
    pub average: f64,
    pub min: u8,
    pub max: u8,
    pub range: u8,
}

impl EmotionStats {
    /// Computes statistics over entries; `None` when the set is empty.
    pub fn from_entries(entries: &[JournalEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let scores: Vec<u8> = entries.iter().map(|e| e.emotion.value()).collect();
        let min = *scores.iter().min().expect("non-empty");
        let max = *scores.iter().max().expect("non-empty");
        let average =
            scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;

        Some(Self {
            average,
            min,
            max,
            range: max - min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::insight::journal::EmotionScore;

    fn entries(scores: &[u8]) -> Vec<JournalEntry> {
        scores
            .iter()
            .map(|&s| {
                JournalEntry::new(
                    "entry",
                    Timestamp::from_unix_secs(1705276800),
                    vec![],
                    EmotionScore::try_new(s).unwrap(),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn trend_insufficient_data_below_two_entries() {
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[])),
            EmotionTrend::InsufficientData
        );
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[7])),
            EmotionTrend::InsufficientData
        );
    }

    #[test]
    fn trend_rising_when_second_half_improves() {
        // Halves average 3 and 7.
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[3, 3, 7, 7])),
            EmotionTrend::Rising
        );
    }

    #[test]
    fn trend_declining_when_second_half_drops() {
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[8, 8, 4, 4])),
            EmotionTrend::Declining
        );
    }

    #[test]
    fn trend_stable_when_flat_and_low_variance() {
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[5, 6, 5, 6])),
            EmotionTrend::Stable
        );
    }

    #[test]
    fn trend_volatile_when_flat_but_swinging() {
        // Halves both average 5.5, but variance is well above 4.
        assert_eq!(
            EmotionTrend::from_entries(&entries(&[1, 10, 1, 10])),
            EmotionTrend::Volatile
        );
    }

    #[test]
    fn stats_none_for_empty_set() {
        assert!(EmotionStats::from_entries(&[]).is_none());
    }

    #[test]
    fn stats_compute_average_min_max_range() {
        let stats = EmotionStats::from_entries(&entries(&[2, 4, 9])).unwrap();
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 9);
        assert_eq!(stats.range, 7);
        assert!((stats.average - 5.0).abs() < f64::EPSILON);
    }
}
