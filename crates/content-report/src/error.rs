use std::path::PathBuf;

/// Errors raised while building report rows.
///
/// A `PathNotUnderRoot` indicates a caller invariant violation (the root
/// passed for relativization is not an ancestor of the path), never a
/// content defect, so it is propagated instead of being swallowed into
/// the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Relativization failed: the row's path does not live under the root.
    #[error("path {path} is not under root {root}")]
    PathNotUnderRoot { path: PathBuf, root: PathBuf },
}
