mod render;
mod stats;

pub use render::{Report, SAMPLE_SIZE};
pub use stats::QuizStats;
