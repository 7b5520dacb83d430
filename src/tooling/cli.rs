//! CLI Tooling
//!
//! Command-line interface for treegen. Provides plan inspection and structure
//! generation with idempotent folder creation and explicit overwrite policy.

use crate::error::TreegenError;
use crate::format::{format_inspect_text, format_plan_text, format_report_text};
use crate::logging::LoggingConfig;
use crate::materialize::{materialize, MaterializeOptions};
use crate::parser::{classify, parse};
use crate::plan::{Operation, Plan};
use crate::types::DEFAULT_DEST_NAME;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Treegen CLI - Directory structures from tree-drawn text
#[derive(Parser)]
#[command(name = "treegen")]
#[command(about = "Generate real directory structures from tree-drawn text layouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the logging configuration from CLI flags.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            config.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            config.file = Some(file.clone());
            config.output = "file".to_string();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a layout and print the operation plan without filesystem effects
    Plan {
        /// Input file containing the tree layout (stdin when omitted)
        input: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show how each input line classifies (depth, name, kind)
    Inspect {
        /// Input file containing the tree layout (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Parse a layout and create the directory structure
    Generate {
        /// Input file containing the tree layout (stdin when omitted)
        input: Option<PathBuf>,
        /// Destination root directory (default: my_project)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// Overwrite an existing destination without prompting
        #[arg(long)]
        force: bool,
        /// Print the plan and stop before creating anything
        #[arg(long)]
        dry_run: bool,
        /// Collect the layout and destination name interactively
        #[arg(long)]
        interactive: bool,
    },
}

/// JSON contract for `plan --format json`.
#[derive(Serialize)]
struct PlanOutput<'a> {
    root: &'a str,
    folders: usize,
    files: usize,
    operations: &'a [Operation],
}

/// CLI execution context.
pub struct CliContext {
    cwd: PathBuf,
}

impl CliContext {
    pub fn new() -> Result<Self, TreegenError> {
        let cwd = std::env::current_dir().map_err(|e| {
            TreegenError::ConfigError(format!("Failed to resolve working directory: {}", e))
        })?;
        Ok(CliContext { cwd })
    }

    /// Execute a command, returning the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, TreegenError> {
        match command {
            Commands::Plan { input, format } => self.handle_plan(input.as_deref(), format),
            Commands::Inspect { input } => self.handle_inspect(input.as_deref()),
            Commands::Generate {
                input,
                dest,
                force,
                dry_run,
                interactive,
            } => self.handle_generate(input.as_deref(), dest.as_deref(), *force, *dry_run, *interactive),
        }
    }

    fn handle_plan(&self, input: Option<&Path>, format: &str) -> Result<String, TreegenError> {
        let text = self.read_input(input)?;
        let parsed = match parse(&text) {
            Some(parsed) => parsed,
            None => return Ok(nothing_to_do()),
        };
        let plan = Plan::from_operations(&parsed.operations);
        if format == "json" {
            let output = PlanOutput {
                root: parsed.root_name(),
                folders: plan.folder_count(),
                files: plan.file_count(),
                operations: &parsed.operations,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        } else {
            Ok(format_plan_text(&plan))
        }
    }

    fn handle_inspect(&self, input: Option<&Path>) -> Result<String, TreegenError> {
        let text = self.read_input(input)?;
        if text.trim().is_empty() {
            return Ok(nothing_to_do());
        }
        let lines: Vec<(String, _)> = text
            .lines()
            .map(|raw| (raw.to_string(), classify(raw)))
            .collect();
        Ok(format_inspect_text(&lines))
    }

    fn handle_generate(
        &self,
        input: Option<&Path>,
        dest: Option<&Path>,
        force: bool,
        dry_run: bool,
        interactive: bool,
    ) -> Result<String, TreegenError> {
        let text = if interactive {
            collect_layout_interactive()?
        } else {
            self.read_input(input)?
        };
        let parsed = match parse(&text) {
            Some(parsed) => parsed,
            None => return Ok(nothing_to_do()),
        };
        let plan = Plan::from_operations(&parsed.operations);

        if dry_run {
            let mut out = format_plan_text(&plan);
            out.push_str("\nDry run: nothing created.\n");
            return Ok(out);
        }

        let dest = self.resolve_dest(dest, interactive)?;
        let overwrite = if dest.exists() {
            if force {
                true
            } else if interactive {
                if !confirm_overwrite(&dest)? {
                    return Ok("Operation cancelled".to_string());
                }
                true
            } else {
                return Err(TreegenError::DestinationExists(dest));
            }
        } else {
            false
        };

        info!(dest = %dest.display(), operations = plan.total(), "generating structure");
        let report = materialize(&dest, &plan, MaterializeOptions { overwrite })?;
        Ok(format_report_text(&report))
    }

    fn resolve_dest(&self, dest: Option<&Path>, interactive: bool) -> Result<PathBuf, TreegenError> {
        if let Some(dest) = dest {
            return Ok(self.cwd.join(dest));
        }
        let name = if interactive {
            prompt_dest_name()?
        } else {
            DEFAULT_DEST_NAME.to_string()
        };
        Ok(self.cwd.join(name))
    }

    fn read_input(&self, input: Option<&Path>) -> Result<String, TreegenError> {
        match input {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|e| TreegenError::InputRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| TreegenError::InputRead {
                        path: PathBuf::from("<stdin>"),
                        source: e,
                    })?;
                Ok(buf)
            }
        }
    }
}

fn nothing_to_do() -> String {
    "Nothing to do: input contained no entries.".to_string()
}

/// Collect layout lines until the first blank line.
fn collect_layout_interactive() -> Result<String, TreegenError> {
    use dialoguer::Input;

    println!("Paste your folder structure, one line at a time (blank line to finish):");
    let mut lines: Vec<String> = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TreegenError::ConfigError(format!("Failed to get user input: {}", e)))?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn prompt_dest_name() -> Result<String, TreegenError> {
    use dialoguer::Input;

    let name: String = Input::new()
        .with_prompt(format!("Destination folder name [{}]", DEFAULT_DEST_NAME))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| TreegenError::ConfigError(format!("Failed to get user input: {}", e)))?;
    let name = name.trim();
    if name.is_empty() {
        Ok(DEFAULT_DEST_NAME.to_string())
    } else {
        Ok(name.to_string())
    }
}

fn confirm_overwrite(dest: &Path) -> Result<bool, TreegenError> {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(format!(
            "Destination '{}' already exists. Overwrite?",
            dest.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| TreegenError::ConfigError(format!("Failed to get user input: {}", e)))
}
