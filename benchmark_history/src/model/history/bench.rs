//!
//! A single named metric measurement.
//!

///
/// A single named metric measurement within an entry.
///
/// `range` and `extra` are emitted by some producer tools (for example the
/// Criterion deviation and the extra sample description) and are preserved
/// verbatim when present.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bench {
    /// The metric name, unique within an entry.
    pub name: String,
    /// The measured value.
    pub value: f64,
    /// The measurement unit, e.g. `MiB/s` or `ms`.
    pub unit: String,
    /// The measurement deviation, verbatim from the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Extra measurement description, verbatim from the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Bench {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, unit: String) -> Self {
        Self {
            name,
            value,
            unit,
            range: None,
            extra: None,
        }
    }
}
