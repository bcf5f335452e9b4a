//! Fixed error message templates surfaced in the report tables.

/// Prefix for an image reference that resolves nowhere under the source root.
/// The raw reference is appended, wrapped in markdown inline-code backticks.
pub const IMAGE_NOT_FOUND: &str = "Image not found:";

/// A source-tree image whose stem has no counterpart in the build tree.
pub const IMAGE_NOT_USED: &str = "Image not used";

/// A build-tree image whose name does not start with a 4C/ID component code.
pub const NO_4CID_COMPONENT: &str =
    "Image name does not start with a 4C/ID component (PI, OI, LT, DT)";

/// Prefix for a relative markdown link whose target does not exist.
pub const LINK_NOT_FOUND: &str = "Link not found:";

/// Prefix for a taxonomy code missing from the dataset.
pub const UNKNOWN_TAXCO_CODE: &str = "Unknown taxonomy code:";

/// Prefix for frontmatter that fails to parse as YAML.
pub const INVALID_FRONTMATTER: &str = "Invalid frontmatter:";

/// Format an image-not-found report entry for a raw reference.
pub fn image_not_found(reference: &str) -> String {
    format!("{IMAGE_NOT_FOUND} `{reference}`")
}
