//!
//! The history file codec.
//!

pub mod error;
pub mod js;

use std::path::Path;
use std::path::PathBuf;

use crate::model::history::History;

use self::error::Error;

///
/// The on-disk representation of a history file.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// A JavaScript assignment of the history object to a global variable,
    /// loadable by the dashboard page with a plain `<script>` tag.
    #[default]
    Js,
    /// The bare JSON object.
    Json,
}

impl Format {
    ///
    /// Detects the format from a file extension, defaulting to JSON.
    ///
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("js") => Self::Js,
            _ => Self::Json,
        }
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "js" => Ok(Self::Js),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown history file format `{string}`. Supported formats: {}",
                vec![Self::Js, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Js => write!(f, "js"),
            Self::Json => write!(f, "json"),
        }
    }
}

///
/// A history together with the format it was read in, so it can be written
/// back the same way.
///
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFile {
    /// The parsed history.
    pub history: History,
    /// The on-disk representation.
    pub format: Format,
}

impl HistoryFile {
    ///
    /// A shortcut constructor for a history file that does not exist yet.
    ///
    pub fn new(format: Format, repo_url: String) -> Self {
        Self {
            history: History::new(repo_url),
            format,
        }
    }

    ///
    /// Renders the history in the file's format.
    ///
    pub fn render(&self) -> String {
        match self.format {
            Format::Js => js::render(&self.history),
            Format::Json => {
                serde_json::to_string_pretty(&self.history).expect("Always valid")
            }
        }
    }

    ///
    /// Writes the history back to `path` in the file's format.
    ///
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.render()).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }
}

impl TryFrom<&Path> for HistoryFile {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let format = Format::from_path(path);
        let payload = match format {
            Format::Js => js::payload(text.as_str()).ok_or_else(|| Error::MissingPrefix {
                path: path.to_path_buf(),
            })?,
            Format::Json => text.as_str(),
        };
        let history: History =
            serde_json::from_str(payload).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(Self { history, format })
    }
}

impl TryFrom<PathBuf> for HistoryFile {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::try_from(path.as_path())
    }
}
