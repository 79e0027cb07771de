//!
//! The JavaScript flavor of the history file.
//!

use crate::model::history::History;

/// The assignment the dashboard page expects at the top of the file.
pub const VARIABLE_PREFIX: &str = "window.BENCHMARK_DATA = ";

///
/// Extracts the JSON payload from the JS assignment.
///
/// Returns `None` when the text does not start with [`VARIABLE_PREFIX`].
/// A trailing semicolon, if any, is dropped.
///
/// ```rust
/// let text = "window.BENCHMARK_DATA = { \"lastUpdate\": 0 };\n";
/// assert_eq!(
///     benchmark_history::js::payload(text),
///     Some("{ \"lastUpdate\": 0 }"),
/// );
/// ```
///
pub fn payload(text: &str) -> Option<&str> {
    let payload = text.trim_start().strip_prefix(VARIABLE_PREFIX)?;
    let payload = payload.trim_end();
    Some(payload.strip_suffix(';').unwrap_or(payload).trim_end())
}

///
/// Renders the history as the JS assignment with a pretty-printed payload.
///
pub fn render(history: &History) -> String {
    let payload = serde_json::to_string_pretty(history).expect("Always valid");
    format!("{VARIABLE_PREFIX}{payload}\n")
}
