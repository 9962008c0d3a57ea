use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use tracing::{debug, info};

use crate::models::QuizDocument;

pub const DEFAULT_QUIZ_PATH: &str = "quiz_data.json";

/// Errors raised while reading a quiz data file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("quiz file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid quiz data in {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_quiz_from_path<P: AsRef<Path>>(path: P) -> Result<QuizDocument, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading quiz file");

    let json_content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let document = parse_quiz(path, &json_content)?;
    info!(
        path = %path.display(),
        questions = document.total_questions(),
        "quiz loaded"
    );

    Ok(document)
}

/// Parses quiz data already in memory. `path` is only used in error messages.
///
/// Malformed JSON is reported as [`LoadError::Parse`]. A document without a
/// `metadata` value or a `questions` array is reported as [`LoadError::Schema`].
/// Fields inside the records are checked later, when the report reads them.
pub fn parse_quiz<P: AsRef<Path>>(path: P, content: &str) -> Result<QuizDocument, LoadError> {
    let path = path.as_ref().to_path_buf();

    serde_json::from_str(content).map_err(|source| match source.classify() {
        Category::Data => LoadError::Schema { path, source },
        Category::Syntax | Category::Eof | Category::Io => LoadError::Parse { path, source },
    })
}
