//!
//! The producer tool identifier.
//!

///
/// The tool that produced an entry's measurements.
///
/// The identifier decides the comparison direction: throughput-style tools
/// report values where bigger is better, the rest report costs where smaller
/// is better.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tool {
    /// The Rust `cargo bench` harness.
    #[serde(rename = "cargo")]
    Cargo,
    /// The Go testing benchmark harness.
    #[serde(rename = "go")]
    Go,
    /// The Benchmark.js harness, reporting operations per second.
    #[serde(rename = "benchmarkjs")]
    BenchmarkJs,
    /// The pytest-benchmark harness.
    #[serde(rename = "pytest")]
    Pytest,
    /// The Google C++ benchmark harness.
    #[serde(rename = "googlecpp")]
    GoogleCpp,
    /// A custom tool reporting values where bigger is better.
    #[serde(rename = "customBiggerIsBetter")]
    CustomBiggerIsBetter,
    /// A custom tool reporting values where smaller is better.
    #[serde(rename = "customSmallerIsBetter")]
    CustomSmallerIsBetter,
}

///
/// The comparison direction of a tool's measurements.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Bigger values are better, e.g. throughput.
    BiggerIsBetter,
    /// Smaller values are better, e.g. duration or memory.
    SmallerIsBetter,
}

impl Tool {
    ///
    /// Returns the comparison direction of the tool's measurements.
    ///
    pub fn direction(self) -> Direction {
        match self {
            Self::BenchmarkJs | Self::CustomBiggerIsBetter => Direction::BiggerIsBetter,
            Self::Cargo
            | Self::Go
            | Self::Pytest
            | Self::GoogleCpp
            | Self::CustomSmallerIsBetter => Direction::SmallerIsBetter,
        }
    }

    ///
    /// All supported tool identifiers.
    ///
    pub fn all() -> Vec<Self> {
        vec![
            Self::Cargo,
            Self::Go,
            Self::BenchmarkJs,
            Self::Pytest,
            Self::GoogleCpp,
            Self::CustomBiggerIsBetter,
            Self::CustomSmallerIsBetter,
        ]
    }
}

impl std::str::FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "cargo" => Ok(Self::Cargo),
            "go" => Ok(Self::Go),
            "benchmarkjs" => Ok(Self::BenchmarkJs),
            "pytest" => Ok(Self::Pytest),
            "googlecpp" => Ok(Self::GoogleCpp),
            "customBiggerIsBetter" => Ok(Self::CustomBiggerIsBetter),
            "customSmallerIsBetter" => Ok(Self::CustomSmallerIsBetter),
            string => anyhow::bail!(
                "Unknown tool `{string}`. Supported tools: {}",
                Self::all()
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Go => write!(f, "go"),
            Self::BenchmarkJs => write!(f, "benchmarkjs"),
            Self::Pytest => write!(f, "pytest"),
            Self::GoogleCpp => write!(f, "googlecpp"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}
