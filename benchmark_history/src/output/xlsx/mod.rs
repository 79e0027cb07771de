//!
//! XLSX export of the history.
//!

pub mod worksheet;

use std::collections::HashSet;

use crate::model::history::History;

use self::worksheet::Worksheet;

/// The hard limit the XLSX format puts on worksheet names.
const WORKSHEET_NAME_LENGTH_LIMIT: usize = 31;

///
/// XLSX export of the history: one worksheet per suite, one row per entry,
/// one column per metric.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheets in suite order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }

    ///
    /// Derives a legal, unique worksheet name from a suite name.
    ///
    fn worksheet_name(suite_name: &str, used: &mut HashSet<String>) -> String {
        let sanitized: String = suite_name
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' | '\'' => ' ',
                character => character,
            })
            .collect();
        let mut name: String = sanitized
            .chars()
            .take(WORKSHEET_NAME_LENGTH_LIMIT)
            .collect();
        let mut ordinal = 2;
        while used.contains(name.as_str()) {
            let suffix = format!("~{ordinal}");
            name = sanitized
                .chars()
                .take(WORKSHEET_NAME_LENGTH_LIMIT - suffix.len())
                .collect();
            name.push_str(suffix.as_str());
            ordinal += 1;
        }
        used.insert(name.clone());
        name
    }
}

impl TryFrom<History> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(history: History) -> Result<Self, Self::Error> {
        let mut used_names = HashSet::with_capacity(history.entries.len());
        let mut worksheets = Vec::with_capacity(history.entries.len());

        for (suite_name, suite) in history.entries.into_iter() {
            let worksheet_name = Self::worksheet_name(suite_name.as_str(), &mut used_names);
            let mut worksheet = Worksheet::new(
                worksheet_name.as_str(),
                vec![("Commit", 12), ("Date", 26)],
            )?;

            for entry in suite.0.into_iter() {
                let date = chrono::DateTime::from_timestamp_millis(entry.date)
                    .map(|date| date.to_rfc3339())
                    .unwrap_or_else(|| entry.date.to_string());
                let row = worksheet.append_entry_row(entry.commit.short_id(), date.as_str())?;
                for bench in entry.benches.iter() {
                    let metric_id = worksheet
                        .add_metric_column(bench.name.as_str(), bench.unit.as_str())?;
                    worksheet.write_value(row, metric_id, bench.value)?;
                }
            }

            worksheets.push(worksheet);
        }

        Ok(Self { worksheets })
    }
}
