//! Answer records submitted by users.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerValue, Timestamp, UserId};

use super::QuestionId;

/// A user's response to one question.
///
/// Immutable once created; consumed transiently by the scoring engine and
/// never retained by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub user_id: UserId,
    pub question_id: QuestionId,
    pub value: AnswerValue,
    pub answered_at: Timestamp,
}

impl Answer {
    /// Creates a new answer record.
    pub fn new(
        user_id: UserId,
        question_id: QuestionId,
        value: AnswerValue,
        answered_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            question_id,
            value,
            answered_at,
        }
    }
}
