use content_images::ImageError;
use content_report::ReportError;
use std::path::PathBuf;

/// Top-level compiler errors.
///
/// `DatasetMissing` and `SourceMissing` are preconditions: the run stops
/// before any report is produced and the process exits with a
/// distinguishing status. Everything else is structural.
#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    /// The dataset file that seeds taxonomy metadata does not exist.
    #[error("dataset file {0} not found")]
    DatasetMissing(PathBuf),

    /// The source content directory does not exist.
    #[error("source directory {0} not found")]
    SourceMissing(PathBuf),

    /// The dataset file exists but is not valid JSON.
    #[error("failed to parse dataset {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure outside the per-item error taxonomy.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CompilerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure; preconditions get their own
    /// codes so callers can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            CompilerError::DatasetMissing(_) => 3,
            CompilerError::SourceMissing(_) => 4,
            _ => 1,
        }
    }
}
