//! Core types shared across the treegen pipeline.

/// Depth: nesting level of an entry relative to the root (root = 0)
pub type Depth = usize;

/// Fallback root name when input carries no undecorated top-level line
pub const DEFAULT_ROOT_NAME: &str = "project";

/// Fallback destination directory when the caller leaves it blank
pub const DEFAULT_DEST_NAME: &str = "my_project";
