//!
//! The benchmark reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The history file to read.
    pub data_path: PathBuf,

    /// Restricts validation, comparison, and export to one suite.
    #[arg(long)]
    pub suite: Option<String>,

    /// Fails when validation reports errors.
    #[arg(long)]
    pub check: bool,

    /// Worsening factor beyond which a metric counts as regressed.
    #[arg(long, default_value_t = 2.0)]
    pub threshold: f64,

    /// Export file path. No export is written when omitted.
    #[arg(long = "output-path")]
    pub output_path: Option<PathBuf>,

    /// Export format: `json`, `csv`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_history::OutputFormat::Json)]
    pub output_format: benchmark_history::OutputFormat,
}
