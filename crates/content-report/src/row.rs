//! Row builders for the two report tables.
//!
//! Builders are pure: they relativize a filesystem path against a supplied
//! root and normalize list fields for display. Rows are never mutated after
//! construction.

use crate::error::ReportError;
use crate::status::Status;
use std::path::Path;

/// Placeholder rendered when a list field is empty.
pub const EMPTY_FIELD: &str = "N/A";

/// Separator used to stack list entries inside one markdown table cell.
const CELL_JOIN: &str = "<br>";

/// One row of the file report: a single validated markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReportRow {
    pub status: Status,
    /// Filename without extension.
    pub file: String,
    /// Path relative to the source root.
    pub path: String,
    /// Taxonomy codes joined for display, `N/A` when empty.
    pub taxonomie: String,
    /// Free-form tags joined for display, `N/A` when empty.
    pub tags: String,
    /// Validation errors joined for display, `N/A` when empty.
    pub errors: String,
}

impl FileReportRow {
    /// Build a row for `path`, relativized against `root`.
    ///
    /// `root` must be a true ancestor of `path`; anything else is a caller
    /// invariant violation and fails with [`ReportError::PathNotUnderRoot`].
    pub fn new(
        status: Status,
        path: &Path,
        root: &Path,
        taxonomie: &[String],
        tags: &[String],
        errors: &[String],
    ) -> Result<Self, ReportError> {
        Ok(Self {
            status,
            file: stem_of(path),
            path: relativize(path, root)?,
            taxonomie: join_or_placeholder(taxonomie),
            tags: join_or_placeholder(tags),
            errors: join_or_placeholder(errors),
        })
    }

    pub(crate) fn cells(&self) -> Vec<String> {
        vec![
            self.status.to_string(),
            self.file.clone(),
            self.path.clone(),
            self.taxonomie.clone(),
            self.tags.clone(),
            self.errors.clone(),
        ]
    }
}

/// One row of the image report: a single classified image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReportRow {
    pub status: Status,
    /// Filename without extension; the cross-tree identity key.
    pub image: String,
    /// Path relative to the root the image was discovered under.
    pub path: String,
    /// Human-readable message, empty for clean rows.
    pub error: String,
}

impl ImageReportRow {
    /// Build a row for `path`, relativized against `root`.
    pub fn new(
        status: Status,
        path: &Path,
        root: &Path,
        error: impl Into<String>,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            status,
            image: stem_of(path),
            path: relativize(path, root)?,
            error: error.into(),
        })
    }

    pub(crate) fn cells(&self) -> Vec<String> {
        vec![
            self.status.to_string(),
            self.image.clone(),
            self.path.clone(),
            self.error.clone(),
        ]
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn relativize(path: &Path, root: &Path) -> Result<String, ReportError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| ReportError::PathNotUnderRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    Ok(relative.to_string_lossy().into_owned())
}

fn join_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        items.join(CELL_JOIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_row_relativizes_and_stems() {
        let root = PathBuf::from("/content");
        let path = root.join("module/lesson-1.md");
        let row = FileReportRow::new(Status::Pass, &path, &root, &[], &[], &[]).unwrap();
        assert_eq!(row.file, "lesson-1");
        assert_eq!(row.path, "module/lesson-1.md");
        assert_eq!(row.taxonomie, EMPTY_FIELD);
        assert_eq!(row.tags, EMPTY_FIELD);
        assert_eq!(row.errors, EMPTY_FIELD);
    }

    #[test]
    fn list_fields_join_with_line_breaks() {
        let root = PathBuf::from("/content");
        let path = root.join("a.md");
        let row = FileReportRow::new(
            Status::Fail,
            &path,
            &root,
            &["ib-1".to_string(), "ib-2".to_string()],
            &[],
            &["broken link".to_string()],
        )
        .unwrap();
        assert_eq!(row.taxonomie, "ib-1<br>ib-2");
        assert_eq!(row.errors, "broken link");
    }

    #[test]
    fn foreign_root_fails_loudly() {
        let err = ImageReportRow::new(
            Status::Fail,
            Path::new("/elsewhere/src/x.png"),
            Path::new("/content"),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::PathNotUnderRoot { .. }));
    }

    #[test]
    fn image_row_keeps_stem_as_identity() {
        let root = PathBuf::from("/build");
        let path = root.join("topic/src/PI_intro.png");
        let row = ImageReportRow::new(Status::Pass, &path, &root, "").unwrap();
        assert_eq!(row.image, "PI_intro");
        assert_eq!(row.path, "topic/src/PI_intro.png");
    }
}
