//! Arena-backed subdivision tree.
//!
//! Nodes live in a flat `Vec`; parent and child links are plain indices into
//! the arena, so pruning is a flag flip and traversal is an explicit stack
//! walk with no recursion-depth limit.

use log::trace;

/// One candidate sub-cube centre at some subdivision depth.
///
/// `children` is either empty (never expanded) or holds exactly `nsubs`
/// entries in slot order; inactive children are kept in place so that a
/// child's position in the sequence always equals its sub-cube slot number.
#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<usize>,
    pub active: bool,
    pub children: Vec<usize>,
}

/// Arena of subdivision nodes; index [`FractalTree::ROOT`] is the root,
/// created active at depth 0.
#[derive(Clone, Debug)]
pub struct FractalTree {
    nodes: Vec<Node>,
}

impl Default for FractalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FractalTree {
    pub const ROOT: usize = 0;

    /// Fresh tree holding only the active root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                active: true,
                children: Vec::new(),
            }],
        }
    }

    /// Total number of nodes in the arena, active or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Appends a child under `parent` and returns its arena index.
    pub fn add_child(&mut self, parent: usize, active: bool) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            active,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Retroactive pruning: the node stays in the arena with its children
    /// attached, it just stops counting toward the surviving set.
    pub fn deactivate(&mut self, id: usize) {
        trace!("deactivating node {}", id);
        self.nodes[id].active = false;
    }

    /// Number of nodes currently flagged active.
    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.active).count()
    }

    /// Child-index paths from the root to every active node, in preorder.
    ///
    /// The root contributes a leading `0` placeholder which carries no
    /// geometric meaning; each further element is the sub-cube slot taken at
    /// that generation. Intermediate active nodes are recorded, not only the
    /// final frontier.
    pub fn active_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut stack = vec![(Self::ROOT, vec![0usize])];

        while let Some((id, path)) = stack.pop() {
            let node = &self.nodes[id];
            if node.active {
                paths.push(path.clone());
            }
            // reversed push keeps preorder on a LIFO stack
            for (slot, &child) in node.children.iter().enumerate().rev() {
                let mut next = path.clone();
                next.push(slot);
                stack.push((child, next));
            }
        }

        trace!("extracted {} active paths", paths.len());
        paths
    }
}
