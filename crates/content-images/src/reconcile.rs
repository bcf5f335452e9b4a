//! Global source/build image reconciliation.

use crate::error::ImageError;
use content_report::{messages, ImageReportRow, ReportContext, Status};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Convention folder holding images inside a content module.
const IMAGE_FOLDER: &str = "src";

/// Path segment that excludes a folder from reconciliation.
const DEPRECATED_SEGMENT: &str = "deprecated";

/// Recognized 4C/ID component codes; every build-tree image name must start
/// with one of them.
const COMPONENT_PREFIXES: [&str; 4] = ["PI", "OI", "LT", "DT"];

/// Classify every image across the source and destination trees, appending
/// classification rows to `report`.
///
/// One pass, run once after all documents are processed:
/// destination images whose stem lacks a component prefix get a FAIL row;
/// source images whose stem has no counterpart stem anywhere in the
/// destination get a NOT_NECESSARY row. Discovery is set-based per tree, so
/// running the pass again over unchanged trees appends an identical row set.
pub fn reconcile_images(
    src_root: &Path,
    dest_root: &Path,
    ignore_folders: &[String],
    report: &mut ReportContext,
) -> Result<(), ImageError> {
    let src_images = images_under(src_root, ignore_folders);
    let dest_images = images_under(dest_root, ignore_folders);

    let dest_stems: BTreeSet<String> = dest_images.iter().filter_map(|p| stem_of(p)).collect();

    for image in &dest_images {
        let named_ok = stem_of(image)
            .map(|stem| has_component_prefix(&stem))
            .unwrap_or(false);
        if !named_ok {
            report.failed_images.push(ImageReportRow::new(
                Status::Fail,
                image,
                dest_root,
                messages::NO_4CID_COMPONENT,
            )?);
        }
    }

    for image in &src_images {
        let used = stem_of(image)
            .map(|stem| dest_stems.contains(&stem))
            .unwrap_or(false);
        if !used {
            report.failed_images.push(ImageReportRow::new(
                Status::NotNecessary,
                image,
                src_root,
                messages::IMAGE_NOT_USED,
            )?);
        }
    }

    Ok(())
}

/// Every file beneath any directory literally named `src` under `root`,
/// deduplicated by path and in deterministic order.
///
/// A `src` folder is skipped when any component of its path equals an
/// ignored folder name or equals `deprecated`. Exact segment comparison,
/// not substring match, so `deprecated-notes` style names survive.
fn images_under(root: &Path, ignore_folders: &[String]) -> BTreeSet<PathBuf> {
    let mut images = BTreeSet::new();

    let image_folders: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == OsStr::new(IMAGE_FOLDER))
        .map(|entry| entry.into_path())
        .filter(|path| {
            // Only segments below the scan root count for exclusion.
            let below_root = path.strip_prefix(root).unwrap_or(path);
            !is_excluded(below_root, ignore_folders)
        })
        .collect();

    for folder in image_folders {
        images.extend(
            WalkDir::new(&folder)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path()),
        );
    }

    images
}

fn is_excluded(path: &Path, ignore_folders: &[String]) -> bool {
    path.components().any(|component| {
        let segment = component.as_os_str().to_string_lossy();
        segment == DEPRECATED_SEGMENT || ignore_folders.iter().any(|f| f.as_str() == segment)
    })
}

fn has_component_prefix(stem: &str) -> bool {
    COMPONENT_PREFIXES
        .iter()
        .any(|prefix| stem.starts_with(prefix))
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
