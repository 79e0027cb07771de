//!
//! The history file codec errors.
//!

use std::path::PathBuf;

///
/// History file reading and writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the history file.
    #[error("Reading history file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// Error writing the history file.
    #[error("Writing history file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// Error parsing the history payload.
    #[error("Parsing history file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// The JS file does not carry the expected variable assignment.
    #[error("History file {path:?} does not start with the `{}` assignment", crate::format::js::VARIABLE_PREFIX)]
    MissingPrefix {
        /// The path to the history file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("History file {path:?} is empty")]
    EmptyFile {
        /// The path to the history file.
        path: PathBuf,
    },
}
