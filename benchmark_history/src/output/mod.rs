//!
//! History export output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::model::history::History;

use self::csv::Csv;
use self::format::OutputFormat;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// An assembled export, ready to be written out.
///
pub enum Output {
    /// The export is a single text file.
    SingleFile(String),
    /// The export is a single XLSX workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the export to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Export file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Export file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(History, OutputFormat)> for Output {
    type Error = anyhow::Error;

    fn try_from((history, output_format): (History, OutputFormat)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            OutputFormat::Json => Json::from(history).into(),
            OutputFormat::Csv => Csv::from(history).into(),
            OutputFormat::Xlsx => Xlsx::try_from(history)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
