//! Handle to a finished tree.

use std::sync::Arc;

use crate::node::subtree_size;
use crate::{Node, NodeKind, NodeRef, Status, TickError};

/// A finished behavior tree, as returned by [`Builder::build`](crate::Builder::build).
///
/// The tree is immutable. Cloning a `Tree` is cheap and yields another
/// handle to the same nodes, which is how one subtree can be spliced into
/// several parents.
pub struct Tree<T> {
    root: NodeRef<T>,
}

impl<T> Tree<T> {
    /// Wraps an already constructed root node.
    pub fn new(root: NodeRef<T>) -> Self {
        Self { root }
    }

    /// Wraps a node by value.
    pub fn from_node(node: impl Node<T> + 'static) -> Self {
        Self {
            root: Arc::new(node),
        }
    }

    /// Evaluates the whole tree once.
    #[inline]
    pub fn tick(&self, delta: T) -> Result<Status, TickError> {
        self.root.tick(delta)
    }

    /// Name of the root node.
    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Kind of the root node.
    pub fn kind(&self) -> NodeKind {
        self.root.kind()
    }

    /// Shared handle to the root node.
    pub fn root(&self) -> &NodeRef<T> {
        &self.root
    }

    /// Consumes the tree and returns its root node.
    pub fn into_root(self) -> NodeRef<T> {
        self.root
    }

    /// Number of nodes in the tree. Shared subtrees count once per
    /// appearance.
    pub fn node_count(&self) -> usize {
        subtree_size(self.root.as_ref())
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T> std::fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.name())
            .field("kind", &self.root.kind())
            .field("nodes", &self.node_count())
            .finish()
    }
}
