//! Image handling for the content compiler.
//!
//! Two passes over the content tree:
//!
//! 1. Per document, [`copy_images`] extracts embedded image references,
//!    resolves each against the source root, and mirrors hits into the
//!    destination tree at the same relative path.
//! 2. Once globally, [`reconcile_images`] walks both trees and classifies
//!    every discovered image by naming convention and by cross-tree
//!    necessity, appending rows to the shared [`ReportContext`].
//!
//! [`ReportContext`]: content_report::ReportContext

pub mod copy;
pub mod error;
pub mod reconcile;

pub use copy::{copy_images, image_references};
pub use error::ImageError;
pub use reconcile::reconcile_images;
