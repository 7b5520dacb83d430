//! Tree-notation parser
//!
//! Turns a flat block of decorated text lines into a strict parent/child
//! hierarchy plus an ordered list of create operations. Two stages: the
//! classifier derives per-line depth and a bare entry name; the builder
//! replays the lines against an ancestor stack to reconstruct the tree.

pub mod builder;
pub mod classifier;

pub use builder::{parse, ParsedStructure};
pub use classifier::{classify, ClassifiedLine};
