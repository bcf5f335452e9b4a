use content_report::ReportError;
use std::path::PathBuf;

/// Errors during image copy or reconciliation.
///
/// Unresolved references are not errors of this kind; they are collected as
/// report strings and never halt the pipeline. This enum covers structural
/// failures only.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Filesystem failure while copying an image or creating its directory.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row construction failed (path not under the supplied root).
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl ImageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
