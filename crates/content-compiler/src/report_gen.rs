//! Final report file generation.
//!
//! Reads the accumulated [`ReportContext`] exactly once and writes the two
//! report markdown files. Formatting lives in `content-report`; this module
//! only assembles sections and touches disk.

use crate::dataset::Dataset;
use crate::error::CompilerError;
use content_report::{markdown_table, ReportContext, Status};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Column headers of the taxco report table.
const TAXCO_HEADERS: [&str; 3] = ["Status", "Code", "Name"];

/// Write the taxonomy report: one row per dataset record, passing when at
/// least one document references its code.
pub fn generate_taxco_report(
    dataset: &Dataset,
    used_codes: &BTreeSet<String>,
    path: &Path,
) -> Result<(), CompilerError> {
    let rows: Vec<Vec<String>> = dataset
        .records()
        .iter()
        .map(|record| {
            let status = if used_codes.contains(&record.code) {
                Status::Pass
            } else {
                Status::Fail
            };
            vec![status.to_string(), record.code.clone(), record.name.clone()]
        })
        .collect();

    let mut out = String::from("# Taxco report\n\n");
    out.push_str(&markdown_table(&TAXCO_HEADERS, &rows));
    write_report(path, &out)
}

/// Write the content report: processed, work-in-progress, and failed file
/// tables, then the image table.
pub fn generate_content_report(report: &ReportContext, path: &Path) -> Result<(), CompilerError> {
    let mut out = String::from("# Content report\n\n");

    out.push_str("## Processed files\n\n");
    out.push_str(&ReportContext::file_table(&report.processed_files));

    out.push_str("\n## Work-in-progress files\n\n");
    out.push_str(&ReportContext::file_table(&report.wip_files));

    out.push_str("\n## Failed files\n\n");
    out.push_str(&ReportContext::file_table(&report.failed_files));

    out.push_str("\n## Images\n\n");
    out.push_str(&ReportContext::image_table(&report.failed_images));

    write_report(path, &out)
}

fn write_report(path: &Path, content: &str) -> Result<(), CompilerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CompilerError::io(parent.to_path_buf(), e))?;
        }
    }
    fs::write(path, content).map_err(|e| CompilerError::io(path.to_path_buf(), e))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
