mod loader;

pub use loader::{DEFAULT_QUIZ_PATH, LoadError, load_quiz_from_path, parse_quiz};
