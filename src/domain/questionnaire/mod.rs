//! Questionnaire module - Axes, questions, answers, and the frozen catalog.

mod answer;
mod axis;
mod catalog;
mod question;

pub use answer::Answer;
pub use axis::{Axis, Pole};
pub use catalog::{diagnostic_catalog, QuestionCatalog};
pub use question::{Polarity, Question, QuestionId};
