//! Treegen: Directory Structures from Tree-Drawn Text
//!
//! Parses an indented or box-drawn textual directory layout (the notation
//! produced by directory-listing tools) into an ordered plan of filesystem
//! operations, then materializes that plan as real directories and empty files.

pub mod error;
pub mod format;
pub mod logging;
pub mod materialize;
pub mod parser;
pub mod plan;
pub mod tooling;
pub mod tree;
pub mod types;
