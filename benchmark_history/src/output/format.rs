//!
//! History export format.
//!

///
/// History export format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// The native data model as pretty-printed JSON.
    #[default]
    Json,
    /// A flat row-per-measurement CSV.
    Csv,
    /// An Excel spreadsheet with one worksheet per suite.
    Xlsx,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown export format `{string}`. Supported formats: {}",
                vec![Self::Json, Self::Csv, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
        }
    }
}
