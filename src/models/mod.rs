mod question;
mod quiz;

#[cfg(test)]
pub(crate) mod fixtures;

pub use question::{Question, QuestionSummary};
pub use quiz::{FieldError, QuizDocument, QuizMetadata};
