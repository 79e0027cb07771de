//!
//! The benchmark reporter binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let file = benchmark_history::HistoryFile::try_from(arguments.data_path.as_path())?;
    let mut history = file.history;

    if let Some(suite) = arguments.suite.as_deref() {
        history.entries.retain(|name, _| name == suite);
        if history.entries.is_empty() {
            anyhow::bail!(
                "Suite `{suite}` is not present in the history file {:?}",
                arguments.data_path
            );
        }
    }

    let findings = benchmark_history::validate(&history);
    let mut error_count = 0;
    for finding in findings.iter() {
        match finding.severity() {
            benchmark_history::Severity::Error => {
                error_count += 1;
                eprintln!("{}: {finding}", "error".bright_red());
            }
            benchmark_history::Severity::Warning => {
                if !arguments.quiet {
                    eprintln!("{}: {finding}", "warning".yellow());
                }
            }
        }
    }
    if arguments.check && error_count > 0 {
        anyhow::bail!(
            "History file {:?} failed validation with {error_count} error(s).",
            arguments.data_path
        );
    }

    let mut regression_count = 0;
    for mut comparison in benchmark_history::compare_latest(&history) {
        comparison.sort_worst();
        regression_count += comparison.regressions(arguments.threshold).count();
        if !arguments.quiet {
            comparison.print(arguments.threshold);
        }
    }

    if let Some(output_path) = arguments.output_path {
        let output: benchmark_history::Output =
            (history, arguments.output_format).try_into()?;
        output.write_to_file(output_path)?;
    }

    if regression_count > 0 {
        anyhow::bail!(
            "{regression_count} metric(s) regressed beyond the {}x threshold.",
            arguments.threshold
        );
    }

    Ok(())
}
