//!
//! Serializing the history to CSV.
//!

use std::fmt::Write;

use crate::model::history::History;

///
/// Serialize the history to CSV in the following format:
/// "suite", "commit", "date", "name", "value", "unit"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let suite_name_estimated_max = 40;
        let commit_id_length = 40;
        let date_estimated_max = 15;
        let metric_name_estimated_max = 60;
        let value_estimated_max = 25;
        let unit_estimated_max = 10;
        suite_name_estimated_max
            + commit_id_length
            + date_estimated_max
            + metric_name_estimated_max
            + value_estimated_max
            + unit_estimated_max
    }

    ///
    /// Doubles the quotes in a field so it survives quoting.
    ///
    fn escape(field: &str) -> String {
        field.replace('"', "\"\"")
    }

    ///
    /// Estimate the size of the CSV file based on the number of measurements and the estimated line length.
    ///
    fn estimate_csv_size(history: &History) -> usize {
        let measurements: usize = history
            .entries
            .values()
            .flat_map(|suite| suite.entries().iter().map(|entry| entry.benches.len()))
            .sum();
        (measurements + 1) * Self::estimate_csv_line_length()
    }
}

impl From<History> for Csv {
    fn from(history: History) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(&history));
        content.push_str(r#""suite", "commit", "date", "name", "value", "unit""#);
        content.push('\n');

        for (suite_name, suite) in history.entries.into_iter() {
            let suite_name = Self::escape(suite_name.as_str());
            for entry in suite.0.into_iter() {
                let commit = Self::escape(entry.commit.id.as_str());
                let date = entry.date;
                for bench in entry.benches.iter() {
                    writeln!(
                        &mut content,
                        r#""{suite_name}", "{commit}", {date}, "{name}", {value}, "{unit}""#,
                        name = Self::escape(bench.name.as_str()),
                        value = bench.value,
                        unit = Self::escape(bench.unit.as_str()),
                    )
                    .expect("Always valid");
                }
            }
        }

        Self { content }
    }
}
