//! Scoring engine - deterministic dimension scores and type resolution.

use tracing::debug;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::questionnaire::{Answer, Axis, Polarity, QuestionCatalog};

use super::{AxisScore, TypeResult};

/// Each answered question contributes exactly this many points, split
/// between the two poles.
pub const POINTS_PER_QUESTION: f64 = 4.0;

/// Stateless scoring computations over questionnaire answers.
///
/// Both operations are pure functions of their inputs: no external state is
/// consulted, and identical inputs always yield identical outputs.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the score for one axis from a user's answers.
    ///
    /// Answers for other axes are filtered out; answers referencing question
    /// ids absent from the catalog are silently ignored (questions may be
    /// added or removed between releases). Each raw answer 1-5 is rescaled
    /// to 0-4 and split between the poles so that every answered question
    /// contributes exactly [`POINTS_PER_QUESTION`] points combined.
    ///
    /// # Edge Cases
    /// - Empty or fully-filtered answer set: both totals zero, strength 0,
    ///   dominant pole defaulting to the first pole.
    pub fn compute_axis_score(
        answers: &[Answer],
        axis: Axis,
        catalog: &QuestionCatalog,
    ) -> AxisScore {
        let mut first_total = 0.0;
        let mut second_total = 0.0;

        for answer in answers {
            let Some(question) = catalog.question_by_id(answer.question_id) else {
                continue;
            };
            if question.axis != axis {
                continue;
            }

            let normalized = f64::from(answer.value.normalized());
            match question.polarity {
                Polarity::FirstPole => {
                    first_total += normalized;
                    second_total += POINTS_PER_QUESTION - normalized;
                }
                Polarity::SecondPole => {
                    second_total += normalized;
                    first_total += POINTS_PER_QUESTION - normalized;
                }
            }
        }

        AxisScore::from_totals(axis, first_total, second_total)
    }

    /// Computes the full four-letter type result from a user's answers.
    ///
    /// Runs [`Self::compute_axis_score`] once per axis in canonical order
    /// and concatenates the dominant poles. The diagnosis timestamp is
    /// supplied by the caller so the whole computation stays a pure function
    /// of its inputs. An answer set that is empty for every axis resolves
    /// each axis to its first pole ("ESTJ"); callers are responsible for
    /// requiring full completion before invoking this.
    pub fn compute_type_result(
        answers: &[Answer],
        user_id: UserId,
        catalog: &QuestionCatalog,
        diagnosed_at: Timestamp,
    ) -> TypeResult {
        debug!(
            user_id = %user_id,
            answers = answers.len(),
            "Computing type result"
        );

        let axis_scores = Axis::ALL
            .map(|axis| Self::compute_axis_score(answers, axis, catalog));

        TypeResult::new(user_id, axis_scores, diagnosed_at)
    }
}
