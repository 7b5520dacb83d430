//! Hierarchy reconstruction from classified lines.
//!
//! Consumes lines in input order and rebuilds the parent/child tree with an
//! explicit ancestor stack: the chain of currently-open folders, depths
//! strictly increasing from the root at the bottom. Popping past the root is
//! recovered by resetting to the root context, never reported as an error.

use crate::parser::classifier::classify;
use crate::plan::Operation;
use crate::tree::{Node, NodeIndex, NodeKind, Tree};
use crate::types::{Depth, DEFAULT_ROOT_NAME};
use tracing::{debug, trace};

/// Result of parsing one input block: the reconstructed tree and the
/// create operations in input order.
#[derive(Debug, Clone)]
pub struct ParsedStructure {
    pub tree: Tree,
    pub operations: Vec<Operation>,
}

impl ParsedStructure {
    pub fn root_name(&self) -> &str {
        self.tree
            .node(self.tree.root())
            .map(|node| node.name.as_str())
            .unwrap_or(DEFAULT_ROOT_NAME)
    }
}

/// One open ancestor folder during the scan.
#[derive(Debug, Clone)]
struct AncestorEntry {
    depth: Depth,
    index: NodeIndex,
    path: String,
}

/// Parse a complete tree-notation text block.
///
/// Returns `None` when the input contains no non-blank lines, the
/// "nothing to do" outcome. Malformed lines are skipped; depth jumps and
/// dedents of any size re-synchronize against the ancestor stack.
pub fn parse(input: &str) -> Option<ParsedStructure> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    let lines: Vec<&str> = text.lines().collect();
    let root_name = detect_root_name(&lines);
    debug!(root = %root_name, lines = lines.len(), "parsing tree structure");

    let mut tree = Tree::with_root(&root_name);
    let root_path = format!("/{}/", root_name);
    let mut operations = vec![Operation::create_folder(
        root_name.clone(),
        root_path.clone(),
        "/".to_string(),
    )];

    let root_entry = AncestorEntry {
        depth: 0,
        index: tree.root(),
        path: root_path,
    };
    let mut stack: Vec<AncestorEntry> = vec![root_entry.clone()];

    for raw in &lines {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        // the root line itself is already seeded
        if trimmed == root_name || trimmed == format!("{}/", root_name) {
            continue;
        }
        let line = match classify(raw) {
            Some(line) => line,
            None => continue,
        };

        // re-synchronize: discard siblings-or-deeper ancestors
        while stack.last().map_or(false, |top| top.depth >= line.depth) {
            stack.pop();
        }
        let parent = match stack.last() {
            Some(entry) => entry.clone(),
            None => {
                // malformed dedent past the root; recover, don't fail
                trace!(name = %line.name, "ancestor stack underflow, resetting to root");
                stack.push(root_entry.clone());
                root_entry.clone()
            }
        };

        let path = if line.is_folder {
            format!("{}{}/", parent.path, line.name)
        } else {
            format!("{}{}", parent.path, line.name)
        };

        let operation = if line.is_folder {
            Operation::create_folder(line.name.clone(), path.clone(), parent.path.clone())
        } else {
            Operation::create_file(line.name.clone(), path.clone(), parent.path.clone())
        };
        trace!(path = %operation.path, depth = line.depth, "planned operation");
        operations.push(operation);

        let index = tree.attach(
            parent.index,
            Node {
                name: line.name,
                path: path.clone(),
                kind: if line.is_folder {
                    NodeKind::Folder
                } else {
                    NodeKind::File
                },
                parent_path: parent.path,
                children: Vec::new(),
            },
        );

        if line.is_folder {
            stack.push(AncestorEntry {
                depth: line.depth,
                index,
                path,
            });
        }
    }

    Some(ParsedStructure { tree, operations })
}

/// The root is the first non-blank line whose first character is not a
/// decoration glyph or space. Falls back to a literal default name.
fn detect_root_name(lines: &[&str]) -> String {
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match line.chars().next() {
            Some(c) if !matches!(c, '│' | '├' | '└' | ' ') => {
                return line.trim().trim_end_matches('/').to_string();
            }
            _ => continue,
        }
    }
    DEFAULT_ROOT_NAME.to_string()
}
