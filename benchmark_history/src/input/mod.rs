//!
//! Run-report input format.
//!

pub mod error;

use std::path::Path;

use crate::model::history::bench::Bench;
use crate::model::history::commit::Commit;
use crate::model::history::entry::Entry;

use self::error::Error as InputError;

///
/// A run report produced at the end of a benchmark run.
///
/// Custom tools emit a bare array of measurements; a report may also carry a
/// complete entry, in which case only its measurements are taken and the
/// commit, tool, and capture time come from the caller.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// A complete history entry.
    Entry(Entry),
    /// A bare array of measurements.
    Benches(Vec<Bench>),
}

impl Report {
    ///
    /// Extracts the measurements, in the order the tool emitted them.
    ///
    pub fn into_benches(self) -> Vec<Bench> {
        match self {
            Self::Entry(entry) => entry.benches,
            Self::Benches(benches) => benches,
        }
    }
}

impl From<Vec<Bench>> for Report {
    fn from(benches: Vec<Bench>) -> Self {
        Self::Benches(benches)
    }
}

impl From<Entry> for Report {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

impl TryFrom<&Path> for Report {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}

impl TryFrom<&Path> for Commit {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}
