//!
//! The benchmark history data model.
//!

pub mod history;
