//! Category taxonomy and hierarchical spend breakdown.

pub mod hierarchy;
pub mod taxonomy;

#[cfg(test)]
mod props;

pub use hierarchy::{CategoryNode, CategoryTree, HierarchyBuilder, OTHER_BUCKET};
pub use taxonomy::ParentCategory;
