//! Tooling & Integration Layer
//!
//! Provides the CLI surface for treegen. Commands are executed through a
//! `CliContext` that returns formatted output strings, keeping all console
//! printing in the binary.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
