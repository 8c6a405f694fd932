//! The ordered-forest adapter contract, plus a minimal concrete forest type.
//!
//! Graph container types are an external collaborator of this workspace
//! (see the crate-level docs): [`OrderedForest`] specifies only the
//! interface the codec needs — ordered root/child iteration, membership,
//! an `is_directed` flag — so callers can implement it over whatever graph
//! type they already have. [`Forest`] is the reference implementation used
//! by generation, reconstruction, and the CLI.

use serde::{Deserialize, Serialize};

/// An ordered, rooted, node-labeled directed forest.
///
/// Implementors must present roots and each node's children in a stable,
/// deterministic order — that order is the sibling order the balanced
/// sequence encodes.
pub trait OrderedForest {
    /// Opaque node handle.
    type Node: Copy + Eq + std::hash::Hash + std::fmt::Debug;
    /// The label carried by each node; affinity is defined over labels.
    type Label: Clone + Eq + std::hash::Hash;

    /// Root nodes, in order.
    fn roots(&self) -> Vec<Self::Node>;

    /// `node`'s children, in declared order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The label carried by `node`.
    fn label(&self, node: Self::Node) -> Self::Label;

    /// Total number of nodes across all trees in the forest.
    fn node_count(&self) -> usize;

    /// Whether this container models a directed graph. Forests over an
    /// undirected container are rejected by the codec with
    /// `Error::UnsupportedGraph`.
    fn is_directed(&self) -> bool;
}

/// A simple arena-backed ordered forest: a `Vec` of nodes, each carrying a
/// label and an ordered child-index list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Forest<L> {
    labels: Vec<L>,
    children: Vec<Vec<u32>>,
    roots: Vec<u32>,
}

impl<L: Clone + Eq + std::hash::Hash> Forest<L> {
    /// An empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            children: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Add a root-level node labeled `label`, returning its index.
    pub fn add_root(&mut self, label: L) -> u32 {
        let id = self.push_node(label);
        self.roots.push(id);
        id
    }

    /// Add a child of `parent` labeled `label`, returning the new node's
    /// index. Children are appended in call order, which becomes sibling
    /// order.
    ///
    /// # Panics
    /// Panics if `parent` is not a valid node index in this forest.
    pub fn add_child(&mut self, parent: u32, label: L) -> u32 {
        assert!((parent as usize) < self.labels.len(), "invalid parent node");
        let id = self.push_node(label);
        self.children[parent as usize].push(id);
        id
    }

    fn push_node(&mut self, label: L) -> u32 {
        let id = u32::try_from(self.labels.len()).expect("forest too large for u32 node ids");
        self.labels.push(label);
        self.children.push(Vec::new());
        id
    }
}

impl<L: Clone + Eq + std::hash::Hash> Default for Forest<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone + Eq + std::hash::Hash> OrderedForest for Forest<L> {
    type Node = u32;
    type Label = L;

    fn roots(&self) -> Vec<u32> {
        self.roots.clone()
    }

    fn children(&self, node: u32) -> Vec<u32> {
        self.children[node as usize].clone()
    }

    fn label(&self, node: u32) -> L {
        self.labels[node as usize].clone()
    }

    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn is_directed(&self) -> bool {
        true
    }
}
