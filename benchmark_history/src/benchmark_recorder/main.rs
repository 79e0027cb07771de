//!
//! The benchmark recorder binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::path::Path;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let input_paths = if arguments.input_paths.len() == 1 && arguments.input_paths[0].is_dir() {
        let resolution_pattern =
            format!("{}/**/*.json", arguments.input_paths[0].to_string_lossy());
        glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .collect()
    } else if arguments.input_paths.is_empty() {
        anyhow::bail!("No run reports provided. Pass report files or a directory with them.");
    } else {
        arguments.input_paths
    };

    let mut benches = Vec::new();
    for path in input_paths.into_iter() {
        match benchmark_history::Report::try_from(path.as_path()) {
            Ok(report) => benches.extend(report.into_benches()),
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!("Warning: Run report {path:?} is empty and will be skipped.");
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    if benches.is_empty() {
        anyhow::bail!("The provided run reports contain no measurements.");
    }

    let commit = benchmark_history::Commit::try_from(arguments.commit_path.as_path())?;
    let date = arguments
        .date
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let entry = benchmark_history::Entry::new(commit, date, arguments.tool, benches);

    let mut file = if arguments.data_path.exists() {
        benchmark_history::HistoryFile::try_from(arguments.data_path.as_path())?
    } else {
        benchmark_history::HistoryFile::new(
            benchmark_history::Format::from_path(arguments.data_path.as_path()),
            arguments.repo_url.clone().unwrap_or_default(),
        )
    };
    if let Some(repo_url) = arguments.repo_url {
        file.history.repo_url = repo_url;
    }

    let bench_count = entry.benches.len();
    file.history
        .append(arguments.suite.as_str(), entry, arguments.max_entries)?;
    file.write(arguments.data_path.as_path())?;

    if !arguments.quiet {
        report_appended(
            arguments.data_path.as_path(),
            arguments.suite.as_str(),
            bench_count,
        );
    }

    Ok(())
}

///
/// Prints the append summary to the terminal.
///
fn report_appended(data_path: &Path, suite: &str, bench_count: usize) {
    eprintln!("Appended {bench_count} measurement(s) to suite `{suite}` in {data_path:?}.");
}
