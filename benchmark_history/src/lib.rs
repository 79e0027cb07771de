//!
//! The benchmark history library.
//!

pub mod analysis;
pub mod format;
pub mod input;
pub mod model;
pub mod output;
pub mod validation;

pub use crate::analysis::compare_latest;
pub use crate::analysis::MetricDelta;
pub use crate::analysis::SuiteComparison;
pub use crate::format::error::Error as FormatError;
pub use crate::format::js;
pub use crate::format::Format;
pub use crate::format::HistoryFile;
pub use crate::input::error::Error as InputError;
pub use crate::input::Report;
pub use crate::model::history::bench::Bench;
pub use crate::model::history::commit::Commit;
pub use crate::model::history::entry::Entry;
pub use crate::model::history::signature::Signature;
pub use crate::model::history::suite::Suite;
pub use crate::model::history::tool::Direction;
pub use crate::model::history::tool::Tool;
pub use crate::model::history::History;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;
pub use crate::validation::validate;
pub use crate::validation::Finding;
pub use crate::validation::Severity;
