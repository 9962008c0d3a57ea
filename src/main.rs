use std::path::PathBuf;

use clap::Parser;
use quiz_report::{DEFAULT_QUIZ_PATH, QuizReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from
    #[arg(short, long, default_value = DEFAULT_QUIZ_PATH)]
    data: PathBuf,
}

fn main() {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let result = QuizReport::from_json(&args.data).and_then(|report| report.print());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
