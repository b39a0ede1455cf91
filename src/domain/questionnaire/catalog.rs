//! Frozen question catalog.
//!
//! The catalog is static configuration: it is built once at process start
//! and never mutated. Questions may be added or removed between releases,
//! which is why the scoring engine silently ignores answers that reference
//! ids absent from the catalog it is given.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Axis, Polarity, Question, QuestionId};

/// An ordered, immutable collection of diagnostic questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Creates a catalog from an ordered list of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Looks up a question by id.
    pub fn question_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Returns the questions measuring a given axis, in catalog order.
    pub fn questions_for_axis(&self, axis: Axis) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.axis == axis).collect()
    }

    /// Returns all questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The built-in 30-question diagnostic catalog.
///
/// Eight questions for E/I, seven for S/N, eight for T/F, seven for J/P.
pub fn diagnostic_catalog() -> &'static QuestionCatalog {
    static CATALOG: Lazy<QuestionCatalog> = Lazy::new(build_diagnostic_catalog);
    &CATALOG
}

fn build_diagnostic_catalog() -> QuestionCatalog {
    use Axis::*;
    use Polarity::*;

    QuestionCatalog::new(vec![
        // E/I (Extraversion / Introversion)
        Question::new(
            1,
            "Being at a party or large gathering fills me with energy",
            ExtraversionIntroversion,
            FirstPole,
        ),
        Question::new(
            2,
            "Time spent alone is what refreshes me",
            ExtraversionIntroversion,
            SecondPole,
        ),
        Question::new(
            3,
            "I can quickly open up and talk even with people I have just met",
            ExtraversionIntroversion,
            FirstPole,
        ),
        Question::new(
            4,
            "I prefer a few friendships with deep conversation over a wide circle",
            ExtraversionIntroversion,
            SecondPole,
        ),
        Question::new(
            5,
            "I usually sort out my thoughts by talking them through with others",
            ExtraversionIntroversion,
            FirstPole,
        ),
        Question::new(
            6,
            "I need time to think things over before I act",
            ExtraversionIntroversion,
            SecondPole,
        ),
        Question::new(
            7,
            "I enjoy group activities and teamwork",
            ExtraversionIntroversion,
            FirstPole,
        ),
        Question::new(
            8,
            "I often get absorbed in my inner world and imagination",
            ExtraversionIntroversion,
            SecondPole,
        ),
        // S/N (Sensing / Intuition)
        Question::new(
            9,
            "I prefer to base decisions on concrete facts and data",
            SensingIntuition,
            FirstPole,
        ),
        Question::new(
            10,
            "I am good at imagining future possibilities and patterns",
            SensingIntuition,
            SecondPole,
        ),
        Question::new(
            11,
            "I value a practical, realistic approach",
            SensingIntuition,
            FirstPole,
        ),
        Question::new(
            12,
            "I enjoy thinking about abstract ideas and theories",
            SensingIntuition,
            SecondPole,
        ),
        Question::new(
            13,
            "I am good at grasping details accurately",
            SensingIntuition,
            FirstPole,
        ),
        Question::new(
            14,
            "I prioritize sketching the big picture and the vision",
            SensingIntuition,
            SecondPole,
        ),
        Question::new(
            15,
            "Past experience and track record weigh heavily in my judgments",
            SensingIntuition,
            FirstPole,
        ),
        // T/F (Thinking / Feeling)
        Question::new(
            16,
            "When making a decision, logical analysis matters most to me",
            ThinkingFeeling,
            FirstPole,
        ),
        Question::new(
            17,
            "I often weigh other people's feelings and values when judging",
            ThinkingFeeling,
            SecondPole,
        ),
        Question::new(
            18,
            "I can take critical feedback as an opportunity to improve",
            ThinkingFeeling,
            FirstPole,
        ),
        Question::new(
            19,
            "I put keeping harmony in relationships first",
            ThinkingFeeling,
            SecondPole,
        ),
        Question::new(
            20,
            "I pride myself on making fair, objective judgments",
            ThinkingFeeling,
            FirstPole,
        ),
        Question::new(
            21,
            "I empathize easily and can put myself in another person's shoes",
            ThinkingFeeling,
            SecondPole,
        ),
        Question::new(
            22,
            "In problem solving I put efficiency before feelings",
            ThinkingFeeling,
            FirstPole,
        ),
        Question::new(
            23,
            "Helping and encouraging people brings me joy",
            ThinkingFeeling,
            SecondPole,
        ),
        // J/P (Judging / Perceiving)
        Question::new(
            24,
            "I like to make a plan and carry it out as written",
            JudgingPerceiving,
            FirstPole,
        ),
        Question::new(
            25,
            "I am good at adapting flexibly as situations change",
            JudgingPerceiving,
            SecondPole,
        ),
        Question::new(
            26,
            "I want work finished well ahead of the deadline",
            JudgingPerceiving,
            FirstPole,
        ),
        Question::new(
            27,
            "I want to keep my options open until the last moment",
            JudgingPerceiving,
            SecondPole,
        ),
        Question::new(
            28,
            "Making a decision leaves me feeling relieved",
            JudgingPerceiving,
            FirstPole,
        ),
        Question::new(
            29,
            "I do not mind changing plans when new information arrives",
            JudgingPerceiving,
            SecondPole,
        ),
        Question::new(
            30,
            "I prefer to work in a tidy, organized environment",
            JudgingPerceiving,
            FirstPole,
        ),
    ])
}
