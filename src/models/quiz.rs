use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Question, QuestionSummary};

/// A record in the document that is missing a field or has one of the
/// wrong type.
#[derive(Debug, thiserror::Error)]
#[error("invalid {record}: {source}")]
pub struct FieldError {
    pub record: String,
    #[source]
    pub source: serde_json::Error,
}

/// Descriptive header of a quiz data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub title: String,
    pub description: String,
    /// Declared question count. Not checked against the real number of questions.
    pub total_questions: i64,
    pub max_points: i64,
    pub year: i64,
}

/// The whole quiz data file: metadata plus questions in file order.
///
/// Only the outer shape is checked when the file is loaded. Records are
/// typed when they are read, so a field nobody reads may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDocument {
    metadata: Value,
    questions: Vec<Value>,
}

impl QuizDocument {
    pub fn metadata(&self) -> Result<QuizMetadata, FieldError> {
        read_record(&self.metadata, || "metadata".to_string())
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The first `limit` questions, or all of them if there are fewer.
    pub fn sample(
        &self,
        limit: usize,
    ) -> impl Iterator<Item = Result<Question, FieldError>> + '_ {
        self.questions
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, value)| read_record(value, || question_label(i)))
    }

    /// Department and image flag of every question, in file order.
    pub fn summaries(&self) -> impl Iterator<Item = Result<QuestionSummary, FieldError>> + '_ {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, value)| read_record(value, || question_label(i)))
    }
}

fn question_label(index: usize) -> String {
    format!("question {}", index + 1)
}

fn read_record<T, F>(value: &Value, label: F) -> Result<T, FieldError>
where
    T: DeserializeOwned,
    F: FnOnce() -> String,
{
    T::deserialize(value).map_err(|source| FieldError {
        record: label(),
        source,
    })
}
