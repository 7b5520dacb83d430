//! Treegen CLI Binary
//!
//! Command-line interface for generating directory structures from
//! tree-drawn text layouts.

use clap::Parser;
use std::process;
use treegen::logging::init_logging;
use treegen::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let logging = cli.logging_config();
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing treegen: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
