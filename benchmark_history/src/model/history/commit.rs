//!
//! The commit metadata of a benchmark run.
//!

use chrono::DateTime;
use chrono::FixedOffset;

use crate::model::history::signature::Signature;

///
/// The commit metadata of a benchmark run, as extracted by the CI job from
/// its triggering event.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Signature,
    /// The commit committer.
    pub committer: Signature,
    /// Whether the commit is distinct from the previously benchmarked one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The commit message.
    pub message: String,
    /// The commit timestamp, with its original UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// The tree hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// The commit URL on the hosting service.
    pub url: String,
}

impl Commit {
    ///
    /// The abbreviated commit hash used in reports.
    ///
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(7)
            .map_or(self.id.as_str(), |(index, _)| &self.id[..index])
    }
}
