use std::path::PathBuf;

/// Default source content directory.
pub const DEFAULT_SRC_DIR: &str = "content";
/// Default build output directory, recreated empty at the start of a run.
pub const DEFAULT_DEST_DIR: &str = "build";
/// Default taxonomy dataset file.
pub const DEFAULT_DATASET: &str = "dataset.json";
/// Default taxonomy report output path.
pub const DEFAULT_TAXCO_REPORT: &str = "taxco_report.md";
/// Default content report output path.
pub const DEFAULT_CONTENT_REPORT: &str = "content_report.md";

/// Folder names skipped during the markdown walk and image reconciliation.
pub const DEFAULT_IGNORE_FOLDERS: [&str; 2] = ["node_modules", ".git"];

/// Everything one compiler run needs to know.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    pub src_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub dataset: PathBuf,
    pub taxco_report_path: PathBuf,
    pub content_report_path: PathBuf,
    pub ignore_folders: Vec<String>,
    /// Skip validation of relative markdown links.
    pub skip_link_check: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from(DEFAULT_SRC_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            dataset: PathBuf::from(DEFAULT_DATASET),
            taxco_report_path: PathBuf::from(DEFAULT_TAXCO_REPORT),
            content_report_path: PathBuf::from(DEFAULT_CONTENT_REPORT),
            ignore_folders: DEFAULT_IGNORE_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_link_check: false,
        }
    }
}
