//!
//! Checks of the history invariants.
//!

use crate::model::history::suite::Suite;
use crate::model::history::History;

///
/// The severity of a validation finding.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The history is still usable for charting, but something drifted.
    Warning,
    /// The history violates an invariant consumers rely on.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

///
/// A single validation finding.
///
#[derive(Debug, thiserror::Error)]
pub enum Finding {
    /// An entry is dated earlier than its predecessor.
    #[error("suite `{suite}`: entry #{index} is dated {date} ms, earlier than its predecessor ({previous} ms)")]
    OutOfOrder {
        /// The suite name.
        suite: String,
        /// The entry position within the suite.
        index: usize,
        /// The entry capture time.
        date: i64,
        /// The predecessor capture time.
        previous: i64,
    },
    /// An entry has no measurements.
    #[error("suite `{suite}`: entry #{index} has no benches")]
    EmptyBenches {
        /// The suite name.
        suite: String,
        /// The entry position within the suite.
        index: usize,
    },
    /// A measurement has an empty unit string.
    #[error("suite `{suite}`: entry #{index}, bench `{name}` has an empty unit")]
    EmptyUnit {
        /// The suite name.
        suite: String,
        /// The entry position within the suite.
        index: usize,
        /// The metric name.
        name: String,
    },
    /// A measurement value is NaN or infinite.
    #[error("suite `{suite}`: entry #{index}, bench `{name}` has a non-finite value")]
    NonFiniteValue {
        /// The suite name.
        suite: String,
        /// The entry position within the suite.
        index: usize,
        /// The metric name.
        name: String,
    },
    /// An entry measures a different metric set than its predecessor.
    #[error("suite `{suite}`: entry #{index} changes the metric set (dropped: [{}], added: [{}])", .dropped.join(", "), .added.join(", "))]
    MetricSetDrift {
        /// The suite name.
        suite: String,
        /// The entry position within the suite.
        index: usize,
        /// Metric names measured by the predecessor but not by this entry.
        dropped: Vec<String>,
        /// Metric names measured by this entry but not by the predecessor.
        added: Vec<String>,
    },
    /// The top-level capture time lags behind the newest entry.
    #[error("`lastUpdate` ({last_update} ms) is older than the newest entry ({newest} ms)")]
    StaleLastUpdate {
        /// The top-level capture time.
        last_update: i64,
        /// The newest entry capture time across all suites.
        newest: i64,
    },
}

impl Finding {
    ///
    /// Returns the severity of the finding.
    ///
    /// Metric-set drift and a lagging `lastUpdate` are expected to be rare
    /// but do not break charting, so they are warnings.
    ///
    pub fn severity(&self) -> Severity {
        match self {
            Self::OutOfOrder { .. }
            | Self::EmptyBenches { .. }
            | Self::EmptyUnit { .. }
            | Self::NonFiniteValue { .. } => Severity::Error,
            Self::MetricSetDrift { .. } | Self::StaleLastUpdate { .. } => Severity::Warning,
        }
    }
}

///
/// Validates the history invariants consumers rely on:
/// - entries within a suite are sorted by capture time;
/// - every entry has at least one measurement;
/// - every measurement has a unit and a finite value;
/// - consecutive entries of a suite measure the same metric set;
/// - `lastUpdate` is not older than the newest entry.
///
pub fn validate(history: &History) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut newest = 0;

    for (suite_name, suite) in history.entries.iter() {
        for (index, entry) in suite.entries().iter().enumerate() {
            if entry.date > newest {
                newest = entry.date;
            }

            if let Some(previous) = index.checked_sub(1).and_then(|index| suite.entries().get(index)) {
                if entry.date < previous.date {
                    findings.push(Finding::OutOfOrder {
                        suite: suite_name.clone(),
                        index,
                        date: entry.date,
                        previous: previous.date,
                    });
                }

                let previous_names = Suite::metric_names(previous);
                let current_names = Suite::metric_names(entry);
                if previous_names != current_names {
                    findings.push(Finding::MetricSetDrift {
                        suite: suite_name.clone(),
                        index,
                        dropped: previous_names
                            .difference(&current_names)
                            .map(|name| (*name).to_owned())
                            .collect(),
                        added: current_names
                            .difference(&previous_names)
                            .map(|name| (*name).to_owned())
                            .collect(),
                    });
                }
            }

            if entry.benches.is_empty() {
                findings.push(Finding::EmptyBenches {
                    suite: suite_name.clone(),
                    index,
                });
            }
            for bench in entry.benches.iter() {
                if bench.unit.is_empty() {
                    findings.push(Finding::EmptyUnit {
                        suite: suite_name.clone(),
                        index,
                        name: bench.name.clone(),
                    });
                }
                if !bench.value.is_finite() {
                    findings.push(Finding::NonFiniteValue {
                        suite: suite_name.clone(),
                        index,
                        name: bench.name.clone(),
                    });
                }
            }
        }
    }

    if history.last_update < newest {
        findings.push(Finding::StaleLastUpdate {
            last_update: history.last_update,
            newest,
        });
    }

    findings
}
