//! Core node traits.
//!
//! [`Node`] is the fundamental abstraction for every element of a tree. It is
//! generic over the time-delta type `T` that the tick driver passes down on
//! every evaluation; nodes never interpret it, they hand it to their children
//! and finally to the leaf functions.
//!
//! [`ParentNode`] adds the ability to accept children and is implemented by
//! every decorator and composite.

use std::sync::Arc;

use crate::{BuildError, Status, TickError};

/// Shared handle to a finished node.
///
/// Nodes are immutable once attached, so a handle may appear under several
/// parents (for example when the same subtree is spliced twice).
pub type NodeRef<T> = Arc<dyn Node<T>>;

/// The kind of a node, used for diagnostics and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Action,
    Inverter,
    Sequence,
    Selector,
    Parallel,
}

/// A behavior tree node that can be ticked with a time delta.
pub trait Node<T>: Send + Sync {
    /// Name given at construction. Only used for diagnostics.
    fn name(&self) -> &str;

    /// The kind of this node.
    fn kind(&self) -> NodeKind;

    /// Evaluate this node (and transitively its subtree).
    ///
    /// # Returns
    ///
    /// - `Ok(status)` with the aggregated result of this tick
    /// - `Err(_)` if a node was malformed or a leaf function failed; the
    ///   error is returned as soon as it occurs and no further nodes are
    ///   ticked
    fn tick(&self, delta: T) -> Result<Status, TickError>;

    /// Immediate children in evaluation order.
    fn children(&self) -> &[NodeRef<T>] {
        &[]
    }
}

/// A node that owns children: decorators and composites.
pub trait ParentNode<T>: Node<T> {
    /// Append a child. Composites accept any number of children, the
    /// inverter accepts exactly one.
    fn add_child(&mut self, child: NodeRef<T>) -> Result<(), BuildError>;
}

/// Counts this node and every node reachable below it.
///
/// Shared subtrees are counted once per appearance.
pub fn subtree_size<T>(node: &dyn Node<T>) -> usize {
    1 + node
        .children()
        .iter()
        .map(|child| subtree_size(child.as_ref()))
        .sum::<usize>()
}
