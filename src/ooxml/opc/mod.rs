/// Package plumbing for chart and drawing parts.
///
/// This module provides the pieces of the Open Packaging Conventions the chart
/// code needs:
///
/// - Part name helpers (rels part paths, relative targets, numeric suffixes)
/// - Relationship parts (`.rels`) with derived `rIdN` allocation
/// - Content type registration
/// - The [`PartStore`] trait and its in-memory [`Package`] implementation
pub mod constants;
pub mod package;
pub mod packuri;
pub mod rel;

// Re-export commonly used types
pub use package::{ContentTypes, Package, PartStore};
pub use rel::{Relationship, Relationships};
