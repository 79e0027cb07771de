//!
//! A named suite of benchmark entries.
//!

use std::collections::BTreeSet;

use crate::model::history::entry::Entry;

///
/// A named suite of benchmark entries, ordered by capture time.
///
/// The name itself is the key in [`crate::model::history::History::entries`].
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Suite(pub Vec<Entry>);

impl Suite {
    ///
    /// The entries in capture-time order.
    ///
    pub fn entries(&self) -> &[Entry] {
        self.0.as_slice()
    }

    ///
    /// The newest entry, if any.
    ///
    pub fn last(&self) -> Option<&Entry> {
        self.0.last()
    }

    ///
    /// The entry preceding the newest one, if any.
    ///
    pub fn previous(&self) -> Option<&Entry> {
        self.0.len().checked_sub(2).and_then(|index| self.0.get(index))
    }

    ///
    /// Whether the entries are ordered by non-decreasing capture time.
    ///
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].date <= pair[1].date)
    }

    ///
    /// The set of metric names measured by an entry.
    ///
    pub fn metric_names(entry: &Entry) -> BTreeSet<&str> {
        entry
            .benches
            .iter()
            .map(|bench| bench.name.as_str())
            .collect()
    }
}
