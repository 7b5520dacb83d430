//! Operation planning
//!
//! An `Operation` is one planned filesystem action with a fully resolved
//! POSIX-style path. The operations list is emitted in input order by the
//! hierarchy builder; `Plan` partitions it folders-first so the materializer
//! can create every directory before any file, without a dependency sort.

use serde::{Deserialize, Serialize};

/// Planned filesystem action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpAction {
    CreateFolder,
    CreateFile,
}

/// One planned create operation with resolved absolute path and parent.
///
/// Paths are slash-separated and rooted at `/<rootName>/...`; folder paths
/// carry a trailing `/`. `parent_path` always names an earlier CreateFolder
/// operation's path (or `/` for the root itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub action: OpAction,
    pub name: String,
    pub path: String,
    #[serde(rename = "parentPath")]
    pub parent_path: String,
}

impl Operation {
    pub fn create_folder(name: String, path: String, parent_path: String) -> Self {
        Operation {
            action: OpAction::CreateFolder,
            name,
            path,
            parent_path,
        }
    }

    pub fn create_file(name: String, path: String, parent_path: String) -> Self {
        Operation {
            action: OpAction::CreateFile,
            name,
            path,
            parent_path,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.action == OpAction::CreateFolder
    }
}

/// Operations partitioned folders-first, preserving input order inside
/// each partition.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub folders: Vec<Operation>,
    pub files: Vec<Operation>,
}

impl Plan {
    pub fn from_operations(operations: &[Operation]) -> Self {
        let (folders, files): (Vec<Operation>, Vec<Operation>) = operations
            .iter()
            .cloned()
            .partition(Operation::is_folder);
        Plan { folders, files }
    }

    /// All operations in materialization order: folders, then files.
    pub fn ordered(&self) -> impl Iterator<Item = &Operation> {
        self.folders.iter().chain(self.files.iter())
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
