//! Reconstructed filesystem tree
//!
//! Holds the parent/child hierarchy rebuilt from classified input lines.
//! Nodes live in an arena and reference their children by index.

pub mod node;

pub use node::{Node, NodeIndex, NodeKind, Tree};
