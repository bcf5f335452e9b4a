//! Per-document image resolution and copy.

use crate::error::ImageError;
use content_report::messages;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Matches both embed syntaxes in one alternation:
/// `![[<filename>]]` (capture 1) and `![<alt>](<path>)` (captures 2, 3).
/// The alternatives are mutually exclusive per match.
static IMAGE_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]|!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Extract every image reference from markdown text, trimmed.
/// The first non-empty captured path wins for each match.
pub fn image_references(content: &str) -> Vec<String> {
    IMAGE_EMBED
        .captures_iter(content)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|reference| !reference.is_empty())
        .collect()
}

/// References with an explicit web scheme are already resolved and out of
/// scope; they are skipped silently, never reported.
fn is_external(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolve every image reference in `content` against `src_dir` and copy
/// each hit into `dest_dir`, preserving the image's relative path under the
/// source root. Parent directories are created as needed.
///
/// Returns the unresolved-reference error strings for this document; an
/// empty list means every reference resolved. Unresolved references are
/// logged and collected, never fatal. Io failures mid-copy do propagate.
pub fn copy_images(
    content: &str,
    src_dir: &Path,
    dest_dir: &Path,
) -> Result<Vec<String>, ImageError> {
    let mut errors = Vec::new();
    if content.is_empty() {
        return Ok(errors);
    }

    for reference in image_references(content) {
        if is_external(&reference) {
            continue;
        }

        match find_by_filename(src_dir, &reference) {
            Some(found) => {
                // find_by_filename only returns paths rooted at src_dir
                let relative = found
                    .strip_prefix(src_dir)
                    .expect("found path is rooted at src_dir");
                let target = dest_dir.join(relative);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| ImageError::io(parent.to_path_buf(), e))?;
                }
                fs::copy(&found, &target).map_err(|e| ImageError::io(target.clone(), e))?;
            }
            None => {
                tracing::warn!(reference = %reference, "image not found under source root");
                errors.push(messages::image_not_found(&reference));
            }
        }
    }

    Ok(errors)
}

/// Find a file under `src_dir` whose name exactly equals the reference's
/// trailing filename component (case-sensitive).
///
/// When several files share that name, the lexicographically first path
/// wins; the tie-break is explicit so resolution never depends on
/// traversal order.
fn find_by_filename(src_dir: &Path, reference: &str) -> Option<PathBuf> {
    let wanted = Path::new(reference).file_name()?;
    WalkDir::new(src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == wanted)
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_wiki_embeds() {
        let refs = image_references("intro ![[PI_intro.png]] outro");
        assert_eq!(refs, vec!["PI_intro.png"]);
    }

    #[test]
    fn extracts_standard_embeds_with_alt_text() {
        let refs = image_references("![diagram](src/OI_flow.png)");
        assert_eq!(refs, vec!["src/OI_flow.png"]);
    }

    #[test]
    fn mixed_syntaxes_yield_one_reference_per_match() {
        let refs = image_references("![[a.png]] text ![alt](b.png)");
        assert_eq!(refs, vec!["a.png", "b.png"]);
    }

    #[test]
    fn references_are_trimmed() {
        let refs = image_references("![alt]( padded.png )");
        assert_eq!(refs, vec!["padded.png"]);
    }

    #[test]
    fn plain_links_are_not_image_references() {
        assert!(image_references("[a page](page.md)").is_empty());
    }

    #[test]
    fn web_schemes_count_as_external() {
        assert!(is_external("http://example.com/x.png"));
        assert!(is_external("https://example.com/x.png"));
        assert!(!is_external("src/x.png"));
    }
}
