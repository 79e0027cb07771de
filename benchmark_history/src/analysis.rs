//!
//! Provides tools for comparing the newest benchmark entries.
//!

use colored::Colorize;

use crate::model::history::entry::Entry;
use crate::model::history::tool::Direction;
use crate::model::history::tool::Tool;
use crate::model::history::History;

///
/// The change of a single metric between two consecutive entries.
///
#[derive(Debug, Clone)]
pub struct MetricDelta<'a> {
    /// The metric name.
    pub name: &'a str,
    /// The measurement unit.
    pub unit: &'a str,
    /// The value in the previous entry.
    pub previous: f64,
    /// The value in the newest entry.
    pub current: f64,
    /// The worsening factor: above 1.0 always reads "worse", regardless of
    /// the tool's comparison direction.
    pub factor: f64,
}

impl MetricDelta<'_> {
    ///
    /// Whether the metric worsened beyond the threshold factor.
    ///
    pub fn is_regression(&self, threshold: f64) -> bool {
        self.factor > threshold
    }

    ///
    /// Whether the metric improved.
    ///
    pub fn is_improvement(&self) -> bool {
        self.factor < 1.0
    }
}

///
/// The comparison of a suite's newest entry against its predecessor.
///
#[derive(Debug)]
pub struct SuiteComparison<'a> {
    /// The suite name.
    pub suite: &'a str,
    /// The tool identifier of the newest entry.
    pub tool: Tool,
    /// The previous entry.
    pub reference: &'a Entry,
    /// The newest entry.
    pub candidate: &'a Entry,
    /// Per-metric changes, for metrics present in both entries.
    pub deltas: Vec<MetricDelta<'a>>,
}

impl<'a> SuiteComparison<'a> {
    ///
    /// Sorts the metric changes worst-first.
    ///
    pub fn sort_worst(&mut self) {
        self.deltas.sort_by(|a, b| {
            b.factor
                .partial_cmp(&a.factor)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    ///
    /// The metric changes that worsened beyond the threshold factor.
    ///
    pub fn regressions(&self, threshold: f64) -> impl Iterator<Item = &MetricDelta<'a>> {
        self.deltas
            .iter()
            .filter(move |delta| delta.is_regression(threshold))
    }

    ///
    /// Writes the comparison to the terminal, worst metrics first.
    ///
    pub fn print(&self, threshold: f64) {
        println!(
            "Suite '{}' ({}): {} vs {}, {} shared metric(s):",
            self.suite.bright_white(),
            self.tool,
            self.candidate.commit.short_id(),
            self.reference.commit.short_id(),
            self.deltas.len(),
        );
        for delta in self.deltas.iter() {
            let marker = if delta.is_regression(threshold) {
                "!".bright_red()
            } else {
                " ".white()
            };
            println!(
                "{} {} {}: {} -> {} {}",
                marker,
                Self::format_factor(delta.factor),
                delta.name,
                delta.previous,
                delta.current,
                delta.unit,
            );
        }
        println!();
    }

    ///
    /// Formats and colorizes a worsening factor as a percentage change.
    ///
    fn format_factor(factor: f64) -> colored::ColoredString {
        let percent = (factor - 1.0) * 100.0;
        if factor > 1.0 {
            format!("{percent:+8.3}%").bright_red()
        } else if factor == 1.0 {
            format!("{percent:+8.3}%").white()
        } else {
            format!("{percent:+8.3}%").green()
        }
    }
}

///
/// Compares the newest entry of every suite against its predecessor.
///
/// Metrics are joined by name; metrics present in only one of the two
/// entries are skipped, as are zero-baseline pairs whose ratio is not
/// finite. Suites with fewer than two entries are skipped.
///
pub fn compare_latest(history: &History) -> Vec<SuiteComparison<'_>> {
    let mut comparisons = Vec::with_capacity(history.entries.len());

    for (suite_name, suite) in history.entries.iter() {
        let (reference, candidate) = match (suite.previous(), suite.last()) {
            (Some(reference), Some(candidate)) => (reference, candidate),
            _ => continue,
        };

        let direction = candidate.tool.direction();
        let mut deltas = Vec::with_capacity(candidate.benches.len());
        for bench in candidate.benches.iter() {
            let previous = match reference.bench(bench.name.as_str()) {
                Some(previous) => previous,
                None => continue,
            };

            let factor = match direction {
                Direction::SmallerIsBetter => bench.value / previous.value,
                Direction::BiggerIsBetter => previous.value / bench.value,
            };
            // A zero baseline yields no meaningful ratio; such pairs are skipped.
            if !factor.is_finite() {
                continue;
            }
            deltas.push(MetricDelta {
                name: bench.name.as_str(),
                unit: bench.unit.as_str(),
                previous: previous.value,
                current: bench.value,
                factor,
            });
        }

        comparisons.push(SuiteComparison {
            suite: suite_name.as_str(),
            tool: candidate.tool,
            reference,
            candidate,
            deltas,
        });
    }

    comparisons
}
