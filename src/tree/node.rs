//! Node types and the arena-backed tree.

use serde::{Deserialize, Serialize};

/// Index of a node within its tree's arena.
pub type NodeIndex = usize;

/// Kind of filesystem entry a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Folder,
    File,
}

/// A single filesystem entry in the reconstructed hierarchy.
///
/// `path` is POSIX-style, rooted at `/<rootName>/`, with a trailing `/`
/// for folders. `parent_path` is the path of the containing folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    pub parent_path: String,
    pub children: Vec<NodeIndex>,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Arena-backed tree rooted at a single folder node.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl Tree {
    /// Create a tree seeded with a root folder named `root_name`.
    /// The root's path is `/<root_name>/` and its parent is `/`.
    pub fn with_root(root_name: &str) -> Self {
        let root = Node {
            name: root_name.to_string(),
            path: format!("/{}/", root_name),
            kind: NodeKind::Folder,
            parent_path: "/".to_string(),
            children: Vec::new(),
        };
        Tree {
            nodes: vec![root],
            root: 0,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Attach `node` beneath `parent`, returning the new node's index.
    /// An out-of-range parent attaches under the root instead.
    pub fn attach(&mut self, parent: NodeIndex, node: Node) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(node);
        let parent = if parent < index { parent } else { self.root };
        self.nodes[parent].children.push(index);
        index
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in insertion (input) order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
