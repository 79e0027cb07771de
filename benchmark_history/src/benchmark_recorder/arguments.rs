//!
//! The benchmark recorder arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark recorder arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Run report files.
    /// If only one path is provided and it is a directory, all JSON files beneath it are taken.
    pub input_paths: Vec<PathBuf>,

    /// The history file to append to. Created when missing.
    /// The extension decides the on-disk format: `js` or `json`.
    #[arg(long = "data-path")]
    pub data_path: PathBuf,

    /// The benchmark suite name.
    #[arg(long)]
    pub suite: String,

    /// The tool that produced the measurements, deciding the comparison direction.
    #[arg(long, default_value_t = benchmark_history::Tool::CustomSmallerIsBetter)]
    pub tool: benchmark_history::Tool,

    /// Path to a JSON file with the triggering commit metadata.
    #[arg(long = "commit-path")]
    pub commit_path: PathBuf,

    /// Repository URL, written to newly created history files.
    #[arg(long = "repo-url")]
    pub repo_url: Option<String>,

    /// Capture time override, in milliseconds since the Unix epoch.
    /// Defaults to the current time.
    #[arg(long)]
    pub date: Option<i64>,

    /// Keep at most this many entries per suite, dropping the oldest.
    #[arg(long = "max-entries")]
    pub max_entries: Option<usize>,
}
