use indexmap::IndexMap;
use serde::Deserialize;

/// A single quiz question as stored in the data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub department: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "question")]
    pub text: String,
    /// Option key to option text, in document order.
    pub options: IndexMap<String, String>,
    pub correct_answer: String,
    pub explanation: String,
    pub has_image: bool,
}

/// The fields of a question that statistics read, for every question in
/// the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub department: String,
    pub has_image: bool,
}
