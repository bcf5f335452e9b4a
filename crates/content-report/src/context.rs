//! The run-wide report accumulator.

use crate::row::{FileReportRow, ImageReportRow};
use crate::table::markdown_table;

/// Column headers of every file report table.
pub const FILE_HEADERS: [&str; 6] = ["Status", "File", "Path", "Taxonomie", "Tags", "Errors"];

/// Column headers of the image report table.
pub const IMAGE_HEADERS: [&str; 4] = ["Status", "Image", "Path", "Error"];

/// Collected report rows for one compiler run.
///
/// Owned by the pipeline and passed `&mut` into each stage: written during
/// the compile pass, read exactly once by report generation at the end.
/// Never a global.
#[derive(Debug, Default)]
pub struct ReportContext {
    /// Documents compiled without findings.
    pub processed_files: Vec<FileReportRow>,
    /// Documents with at least one validation error.
    pub failed_files: Vec<FileReportRow>,
    /// Documents flagged work-in-progress by their frontmatter.
    pub wip_files: Vec<FileReportRow>,
    /// Images classified as missing, unused, or mis-named.
    pub failed_images: Vec<ImageReportRow>,
}

impl ReportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a file table with the fixed six-column header set.
    pub fn file_table(rows: &[FileReportRow]) -> String {
        let cells: Vec<Vec<String>> = rows.iter().map(FileReportRow::cells).collect();
        markdown_table(&FILE_HEADERS, &cells)
    }

    /// Render the image table with the fixed four-column header set.
    pub fn image_table(rows: &[ImageReportRow]) -> String {
        let cells: Vec<Vec<String>> = rows.iter().map(ImageReportRow::cells).collect();
        markdown_table(&IMAGE_HEADERS, &cells)
    }
}
