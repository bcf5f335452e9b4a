use content_images::{copy_images, reconcile_images};
use content_report::{ReportContext, Status};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, bytes: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

#[test]
fn no_references_means_no_errors_and_no_writes() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let errors = copy_images("# A document\n\nPlain text only.", src.path(), dest.path()).unwrap();

    assert!(errors.is_empty());
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn resolvable_reference_copies_bytes_at_mirrored_path() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let image = src.path().join("topic/src/PI_intro.png");
    write_file(&image, b"png-bytes");

    let errors = copy_images("![[PI_intro.png]]", src.path(), dest.path()).unwrap();

    assert!(errors.is_empty());
    let copied = dest.path().join("topic/src/PI_intro.png");
    assert_eq!(fs::read(&copied).unwrap(), b"png-bytes");
}

#[test]
fn standard_syntax_resolves_by_trailing_filename() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("module/src/OI_flow.png"), b"flow");

    let errors = copy_images("![flow](images/OI_flow.png)", src.path(), dest.path()).unwrap();

    assert!(errors.is_empty());
    assert!(dest.path().join("module/src/OI_flow.png").exists());
}

#[test]
fn unresolved_reference_yields_one_error_entry_and_no_copy() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let errors = copy_images("![missing](ghost.png)", src.path(), dest.path()).unwrap();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("`ghost.png`"));
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn external_references_are_skipped_silently() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let content = "![a](http://example.com/a.png) ![b](https://example.com/b.png)";
    let errors = copy_images(content, src.path(), dest.path()).unwrap();

    assert!(errors.is_empty());
}

#[test]
fn processing_continues_past_unresolved_references() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("src/PI_real.png"), b"real");

    let content = "![[ghost.png]]\n![[PI_real.png]]";
    let errors = copy_images(content, src.path(), dest.path()).unwrap();

    assert_eq!(errors.len(), 1);
    assert!(dest.path().join("src/PI_real.png").exists());
}

#[test]
fn duplicate_filenames_resolve_to_lexicographically_first_path() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("b/src/PI_dup.png"), b"from-b");
    write_file(&src.path().join("a/src/PI_dup.png"), b"from-a");

    copy_images("![[PI_dup.png]]", src.path(), dest.path()).unwrap();

    assert_eq!(
        fs::read(dest.path().join("a/src/PI_dup.png")).unwrap(),
        b"from-a"
    );
    assert!(!dest.path().join("b/src/PI_dup.png").exists());
}

#[test]
fn referenced_and_well_named_image_gets_no_rows() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("src/PI_intro.png"), b"img");

    copy_images("![[PI_intro.png]]", src.path(), dest.path()).unwrap();

    let mut report = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut report).unwrap();

    assert!(report.failed_images.is_empty());
}

#[test]
fn unreferenced_source_image_is_not_necessary() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("src/logo.png"), b"logo");

    let mut report = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut report).unwrap();

    assert_eq!(report.failed_images.len(), 1);
    let row = &report.failed_images[0];
    assert_eq!(row.status, Status::NotNecessary);
    assert_eq!(row.image, "logo");
    assert_eq!(row.path, "src/logo.png");
}

#[test]
fn misnamed_destination_image_fails_naming_check() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    // Manually placed file, never produced by the copy pass.
    write_file(&dest.path().join("src/banner.png"), b"banner");

    let mut report = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut report).unwrap();

    assert_eq!(report.failed_images.len(), 1);
    let row = &report.failed_images[0];
    assert_eq!(row.status, Status::Fail);
    assert_eq!(row.path, "src/banner.png");
}

#[test]
fn same_stem_counts_as_used_regardless_of_location_and_extension() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("a/src/PI_chart.png"), b"x");
    write_file(&dest.path().join("elsewhere/src/PI_chart.jpg"), b"y");

    let mut report = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut report).unwrap();

    let unused: Vec<_> = report
        .failed_images
        .iter()
        .filter(|r| r.status == Status::NotNecessary)
        .collect();
    assert!(unused.is_empty());
}

#[test]
fn deprecated_and_ignored_folders_are_skipped() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("deprecated/src/old.png"), b"old");
    write_file(&src.path().join("node_modules/src/dep.png"), b"dep");

    let mut report = ReportContext::new();
    let ignored = vec!["node_modules".to_string()];
    reconcile_images(src.path(), dest.path(), &ignored, &mut report).unwrap();

    assert!(report.failed_images.is_empty());
}

#[test]
fn reconciliation_is_idempotent_per_call() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_file(&src.path().join("src/logo.png"), b"logo");
    write_file(&dest.path().join("src/banner.png"), b"banner");

    let mut first = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut first).unwrap();
    let mut second = ReportContext::new();
    reconcile_images(src.path(), dest.path(), &[], &mut second).unwrap();

    assert_eq!(first.failed_images, second.failed_images);
}
