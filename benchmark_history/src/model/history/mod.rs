//!
//! The benchmark history representation.
//!

pub mod bench;
pub mod commit;
pub mod entry;
pub mod signature;
pub mod suite;
pub mod tool;

use indexmap::IndexMap;

use self::entry::Entry;
use self::suite::Suite;

///
/// The benchmark history representation.
///
/// Mirrors the data file maintained by the CI job: a flat object with the
/// capture time of the newest entry, the repository URL, and the suites.
/// Suites keep their on-disk order, hence the `IndexMap`.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct History {
    /// Capture time of the newest entry, in milliseconds since the Unix epoch.
    #[serde(rename = "lastUpdate")]
    pub last_update: i64,
    /// URL of the repository the measurements belong to.
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    /// The suites, keyed by name.
    pub entries: IndexMap<String, Suite>,
}

impl History {
    ///
    /// A shortcut constructor for an empty history of a repository.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: IndexMap::new(),
        }
    }

    ///
    /// Appends an entry to a suite, creating the suite on first use.
    ///
    /// Entries within a suite are ordered by capture time, so appending an
    /// entry dated earlier than the newest one is an error. `last_update` is
    /// advanced to the appended entry's date and never moves backwards.
    ///
    /// When `max_entries` is set, the oldest entries beyond the limit are
    /// dropped from the suite.
    ///
    pub fn append(
        &mut self,
        suite_name: &str,
        entry: Entry,
        max_entries: Option<usize>,
    ) -> anyhow::Result<()> {
        let date = entry.date;
        let suite = self.entries.entry(suite_name.to_owned()).or_default();
        if let Some(newest) = suite.last() {
            if date < newest.date {
                anyhow::bail!(
                    "Suite `{suite_name}` already has an entry dated {} ms, cannot append an older one dated {date} ms",
                    newest.date,
                );
            }
        }
        suite.0.push(entry);
        if let Some(max_entries) = max_entries {
            if max_entries > 0 && suite.0.len() > max_entries {
                let excess = suite.0.len() - max_entries;
                suite.0.drain(..excess);
            }
        }
        if date > self.last_update {
            self.last_update = date;
        }
        Ok(())
    }
}
