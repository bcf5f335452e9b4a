//! Report core for the content compiler.
//!
//! Everything here is pure: row builders that normalize filesystem paths
//! into flat report records, a markdown table formatter, and the
//! [`ReportContext`] accumulator that the pipeline threads through its
//! stages and report generation reads exactly once at the end of a run.

pub mod context;
pub mod error;
pub mod messages;
pub mod row;
pub mod status;
pub mod table;

pub use context::ReportContext;
pub use error::ReportError;
pub use row::{FileReportRow, ImageReportRow};
pub use status::Status;
pub use table::markdown_table;
