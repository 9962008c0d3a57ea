//! # quiz-report
//!
//! Loads a quiz data file and prints a plain-text summary of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_report::{QuizReport, ReportError};
//!
//! fn main() -> Result<(), ReportError> {
//!     // Load the quiz from a JSON file
//!     let report = QuizReport::from_json("quiz_data.json")?;
//!
//!     // Print metadata, sample questions and statistics to stdout
//!     report.print()?;
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;
mod report;

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

pub use data::{DEFAULT_QUIZ_PATH, LoadError, load_quiz_from_path, parse_quiz};
pub use models::{FieldError, Question, QuestionSummary, QuizDocument, QuizMetadata};
pub use report::{QuizStats, Report, SAMPLE_SIZE};

/// Error type for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Error loading the quiz file.
    #[error("Failed to load quiz: {0}")]
    Load(#[from] LoadError),
    /// A record read by the report is missing a field or has the wrong type.
    #[error("Invalid quiz data: {0}")]
    Field(#[from] FieldError),
    /// IO error while writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded quiz, ready to be reported on.
pub struct QuizReport {
    document: QuizDocument,
}

impl QuizReport {
    pub fn new(document: QuizDocument) -> Self {
        Self { document }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_report::QuizReport;
    ///
    /// let report = QuizReport::from_json("quiz_data.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let document = load_quiz_from_path(path)?;
        Ok(Self::new(document))
    }

    /// Print the report to standard output.
    pub fn print(&self) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        debug!(questions = self.document.total_questions(), "rendering report");
        Report::new(&self.document).write_to(out)
    }

    pub fn document(&self) -> &QuizDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_produces_no_output() {
        let path = std::env::temp_dir().join("quiz-report-missing-facade.json");
        let mut buffer: Vec<u8> = Vec::new();

        let result = QuizReport::from_json(&path).and_then(|report| report.write_to(&mut buffer));

        assert!(matches!(
            result,
            Err(ReportError::Load(LoadError::NotFound { .. }))
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_to_buffer() {
        let document =
            crate::models::fixtures::document(&[("Algebra", false), ("Geometria", true)]);
        let report = QuizReport::new(document);

        let mut buffer = Vec::new();
        report.write_to(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("=== METADANE QUIZU ===\nTytuł: T\n"));
        assert!(output.contains("  Algebra: 1 pytań\n  Geometria: 1 pytań\n"));
        assert!(output.ends_with("Pytania z obrazkami: 1/2\n"));
        assert_eq!(report.document().total_questions(), 2);
    }
}
