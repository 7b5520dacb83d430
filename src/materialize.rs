//! Plan materialization
//!
//! Executes an operation plan against the real filesystem: all folders in one
//! pass, then all files, so no file ever precedes its containing directory.
//! Individual operation failures are collected with the failing path rather
//! than aborting; partial structure creation is a reported outcome.

use crate::error::TreegenError;
use crate::plan::Plan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Destination policy for materialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterializeOptions {
    /// Remove a pre-existing destination root before creating. Confirmation
    /// belongs to the caller; with `false` an existing destination is an error.
    pub overwrite: bool,
}

/// One operation that failed during materialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationFailure {
    pub path: String,
    pub error: String,
}

/// Outcome of applying a plan. Failures are per-operation; the counts cover
/// what was actually created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterializeReport {
    pub destination: PathBuf,
    pub folders_created: usize,
    pub files_created: usize,
    pub failures: Vec<OperationFailure>,
    /// Entries found on disk under the destination after application
    pub entries_on_disk: usize,
}

/// Apply `plan` beneath `dest`, creating directories then empty files.
///
/// Operation paths are POSIX-style (`/<rootName>/...`) and are translated to
/// host paths by component-wise join under `dest`. Pre-existing files at
/// CreateFile paths are truncated.
pub fn materialize(
    dest: &Path,
    plan: &Plan,
    options: MaterializeOptions,
) -> Result<MaterializeReport, TreegenError> {
    if dest.exists() {
        if !options.overwrite {
            return Err(TreegenError::DestinationExists(dest.to_path_buf()));
        }
        info!(dest = %dest.display(), "removing existing destination");
        remove_existing(dest)?;
    }
    fs::create_dir_all(dest).map_err(|e| TreegenError::Filesystem {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let mut failures = Vec::new();
    let mut folders_created = 0;
    let mut files_created = 0;

    for op in &plan.folders {
        let target = host_path(dest, &op.path);
        match fs::create_dir_all(&target) {
            Ok(()) => {
                debug!(path = %target.display(), "created folder");
                folders_created += 1;
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "folder creation failed");
                failures.push(OperationFailure {
                    path: op.path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    for op in &plan.files {
        let target = host_path(dest, &op.path);
        if let Some(parent) = target.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %e, "parent creation failed");
                    failures.push(OperationFailure {
                        path: op.path.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            }
        }
        match fs::write(&target, "") {
            Ok(()) => {
                debug!(path = %target.display(), "created file");
                files_created += 1;
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "file creation failed");
                failures.push(OperationFailure {
                    path: op.path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    let entries_on_disk = WalkDir::new(dest)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .count();

    let destination = dunce::canonicalize(dest).unwrap_or_else(|_| dest.to_path_buf());
    info!(
        dest = %destination.display(),
        folders = folders_created,
        files = files_created,
        failures = failures.len(),
        "materialization finished"
    );

    Ok(MaterializeReport {
        destination,
        folders_created,
        files_created,
        failures,
        entries_on_disk,
    })
}

fn remove_existing(dest: &Path) -> Result<(), TreegenError> {
    let result = if dest.is_dir() {
        fs::remove_dir_all(dest)
    } else {
        fs::remove_file(dest)
    };
    result.map_err(|e| TreegenError::Filesystem {
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Translate a POSIX-style operation path into a host path under `dest`.
fn host_path(dest: &Path, op_path: &str) -> PathBuf {
    op_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(dest.to_path_buf(), |path, segment| path.join(segment))
}
