//! Content compiler orchestration.
//!
//! Pipeline order, per run: load the dataset, verify the source root,
//! recreate the destination root empty, process every markdown document
//! (image copy, frontmatter validation, embed rewriting, link check), run
//! one global image reconciliation across both trees, then write the taxco
//! and content reports.

pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod report_gen;

pub use config::CompilerConfig;
pub use dataset::Dataset;
pub use error::CompilerError;
pub use pipeline::run;
