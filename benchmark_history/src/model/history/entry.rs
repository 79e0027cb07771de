//!
//! One recorded benchmark run.
//!

use crate::model::history::bench::Bench;
use crate::model::history::commit::Commit;
use crate::model::history::tool::Tool;

///
/// One recorded benchmark run, tied to the commit that triggered it.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// The triggering commit.
    pub commit: Commit,
    /// Capture time, in milliseconds since the Unix epoch.
    pub date: i64,
    /// The tool identifier, deciding the comparison direction.
    pub tool: Tool,
    /// The measurements, in the order the tool emitted them.
    pub benches: Vec<Bench>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: i64, tool: Tool, benches: Vec<Bench>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// Looks up a measurement by its metric name.
    ///
    pub fn bench(&self, name: &str) -> Option<&Bench> {
        self.benches.iter().find(|bench| bench.name == name)
    }
}
