//! Run orchestration.

use crate::config::CompilerConfig;
use crate::dataset::Dataset;
use crate::document::{self, Document};
use crate::error::CompilerError;
use crate::report_gen;
use content_images::{copy_images, reconcile_images};
use content_report::{FileReportRow, ReportContext, Status};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

/// Execute one full compiler run and return the accumulated report.
///
/// Precondition failures (missing dataset, missing source root) abort
/// before anything is written; per-document findings only ever land in the
/// report. Both report files exist afterwards even when every document has
/// errors.
pub fn run(config: &CompilerConfig) -> Result<ReportContext, CompilerError> {
    let start = Instant::now();

    let dataset = Dataset::load(&config.dataset)?;
    if !config.src_dir.exists() {
        return Err(CompilerError::SourceMissing(config.src_dir.clone()));
    }
    reset_dest(&config.dest_dir)?;

    let mut report = ReportContext::new();
    let mut used_codes = BTreeSet::new();
    compile_markdown_files(config, &dataset, &mut report, &mut used_codes)?;

    reconcile_images(
        &config.src_dir,
        &config.dest_dir,
        &config.ignore_folders,
        &mut report,
    )?;

    report_gen::generate_taxco_report(&dataset, &used_codes, &config.taxco_report_path)?;
    report_gen::generate_content_report(&report, &config.content_report_path)?;

    tracing::info!(
        elapsed = ?start.elapsed(),
        processed = report.processed_files.len(),
        failed = report.failed_files.len(),
        wip = report.wip_files.len(),
        images = report.failed_images.len(),
        "compile run finished"
    );
    Ok(report)
}

/// Delete the destination tree if present and recreate it empty.
fn reset_dest(dest_dir: &Path) -> Result<(), CompilerError> {
    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir).map_err(|e| CompilerError::io(dest_dir.to_path_buf(), e))?;
    }
    fs::create_dir_all(dest_dir).map_err(|e| CompilerError::io(dest_dir.to_path_buf(), e))
}

/// Walk the source tree and process every markdown document, appending one
/// file row per document to the report.
fn compile_markdown_files(
    config: &CompilerConfig,
    dataset: &Dataset,
    report: &mut ReportContext,
    used_codes: &mut BTreeSet<String>,
) -> Result<(), CompilerError> {
    let ignored = &config.ignore_folders;
    let walker = WalkDir::new(&config.src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir() && is_ignored(entry.file_name(), ignored))
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = config.src_dir.clone();
            CompilerError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() || entry.path().extension() != Some(OsStr::new("md")) {
            continue;
        }
        compile_document(entry.path(), config, dataset, report, used_codes)?;
    }
    Ok(())
}

fn is_ignored(name: &OsStr, ignore_folders: &[String]) -> bool {
    let name = name.to_string_lossy();
    name == "deprecated" || ignore_folders.iter().any(|f| f.as_str() == name)
}

/// Process one markdown document: copy its images, validate its
/// frontmatter and links, write the compiled text into the build tree, and
/// record exactly one report row.
fn compile_document(
    path: &Path,
    config: &CompilerConfig,
    dataset: &Dataset,
    report: &mut ReportContext,
    used_codes: &mut BTreeSet<String>,
) -> Result<(), CompilerError> {
    tracing::debug!(path = %path.display(), "compiling document");
    let raw = fs::read_to_string(path).map_err(|e| CompilerError::io(path.to_path_buf(), e))?;

    let doc = Document::parse(&raw);
    let mut errors = doc.errors.clone();
    errors.extend(doc.validate_taxonomie(dataset));
    used_codes.extend(doc.taxonomie.iter().cloned());

    errors.extend(copy_images(&raw, &config.src_dir, &config.dest_dir)?);

    if !config.skip_link_check {
        let doc_dir = path.parent().unwrap_or(&config.src_dir);
        errors.extend(document::check_links(&raw, doc_dir, &config.src_dir));
    }

    write_compiled(path, &raw, config)?;

    let status = if errors.is_empty() {
        Status::Pass
    } else {
        Status::Fail
    };
    let row = FileReportRow::new(
        status,
        path,
        &config.src_dir,
        &doc.taxonomie,
        &doc.tags,
        &errors,
    )?;

    // Errors always win over the WIP flag.
    if !errors.is_empty() {
        report.failed_files.push(row);
    } else if doc.wip {
        report.wip_files.push(row);
    } else {
        report.processed_files.push(row);
    }
    Ok(())
}

/// Write the compiled document at the mirrored relative path, with wiki
/// image embeds rewritten to standard syntax.
fn write_compiled(path: &Path, raw: &str, config: &CompilerConfig) -> Result<(), CompilerError> {
    let relative = path
        .strip_prefix(&config.src_dir)
        .expect("walked path is rooted at src_dir");
    let target = config.dest_dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CompilerError::io(parent.to_path_buf(), e))?;
    }
    let compiled = document::rewrite_wiki_embeds(raw);
    fs::write(&target, compiled).map_err(|e| CompilerError::io(target.clone(), e))
}
