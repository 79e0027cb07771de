//!
//! The native JSON export.
//!

use crate::model::history::History;

///
/// The native JSON export, corresponding to the inner data model.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<History> for Json {
    fn from(history: History) -> Self {
        let content = serde_json::to_string_pretty(&history).expect("Always valid");
        Self { content }
    }
}
