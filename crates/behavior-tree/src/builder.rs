//! Fluent, stack-based tree construction.
//!
//! The [`Builder`] keeps a stack of parent nodes that are still being
//! populated. Leaf calls attach to the parent on top of the stack, parent
//! calls push a new scope, and [`Builder::end`] closes the innermost scope:
//!
//! ```rust
//! use fluent_behavior_tree::{Builder, Status};
//!
//! let tree = Builder::<f32>::new()
//!     .sequence("patrol")
//!         .condition("has-route", |_| true)
//!         .action("walk", |_| Status::Running)
//!     .end()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tree.tick(0.1).unwrap(), Status::Running);
//! ```
//!
//! Calls never fail on their own. The first structural mistake is recorded,
//! every later call is ignored, and [`Builder::build`] returns the error.

use std::sync::Arc;

use crate::error::Result;
use crate::{
    ActionNode, BoxError, BuildError, InverterNode, NodeKind, NodeRef, ParallelNode,
    ParentNode, SelectorNode, SequenceNode, Status, Tree,
};

/// A parent node that is still open on the builder stack.
enum OpenNode<T> {
    Inverter(InverterNode<T>),
    Sequence(SequenceNode<T>),
    Selector(SelectorNode<T>),
    Parallel(ParallelNode<T>),
}

impl<T: Copy + 'static> OpenNode<T> {
    fn as_parent(&mut self) -> &mut dyn ParentNode<T> {
        match self {
            OpenNode::Inverter(node) => node,
            OpenNode::Sequence(node) => node,
            OpenNode::Selector(node) => node,
            OpenNode::Parallel(node) => node,
        }
    }

    /// Fails if this parent cannot take another child. A parent opened
    /// under this one stays on top of the stack until `end` attaches it.
    fn ensure_vacant(&self) -> Result<()> {
        match self {
            OpenNode::Inverter(node) => node.ensure_vacant(),
            OpenNode::Sequence(_) | OpenNode::Selector(_) | OpenNode::Parallel(_) => Ok(()),
        }
    }

    fn into_node(self) -> NodeRef<T> {
        match self {
            OpenNode::Inverter(node) => Arc::new(node),
            OpenNode::Sequence(node) => Arc::new(node),
            OpenNode::Selector(node) => Arc::new(node),
            OpenNode::Parallel(node) => Arc::new(node),
        }
    }
}

/// Assembles a [`Tree`] from a linear sequence of calls.
///
/// # Lifecycle
///
/// - empty: nothing open, nothing completed
/// - open: one or more parents on the stack
/// - closed: the stack drained again and the outermost parent is recorded
///   as the last completed node
/// - built: [`Builder::build`] consumed the builder
pub struct Builder<T> {
    stack: Vec<OpenNode<T>>,
    current: Option<NodeRef<T>>,
    error: Option<BuildError>,
}

impl<T: Copy + 'static> Builder<T> {
    /// Creates an empty builder with no open parents.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: None,
            error: None,
        }
    }

    /// Adds an action leaf to the open parent.
    pub fn action<F>(self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(T) -> Status + Send + Sync + 'static,
    {
        self.leaf(ActionNode::new(name, action))
    }

    /// Adds an action leaf whose function may fail.
    pub fn try_action<F, E>(self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(T) -> std::result::Result<Status, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.leaf(ActionNode::fallible(name, action))
    }

    /// Adds a condition leaf: `Success` when the predicate holds, `Failure`
    /// otherwise.
    pub fn condition<P>(self, name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(T) -> bool + Send + Sync + 'static,
    {
        self.leaf(ActionNode::condition(name, predicate))
    }

    /// Adds a condition leaf whose predicate may fail.
    pub fn try_condition<P, E>(self, name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(T) -> std::result::Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.leaf(ActionNode::try_condition(name, predicate))
    }

    /// Opens an inverter. It must receive exactly one child before `end`.
    pub fn inverter(self, name: impl Into<String>) -> Self {
        self.open(OpenNode::Inverter(InverterNode::new(name)))
    }

    /// Opens a sequence.
    pub fn sequence(self, name: impl Into<String>) -> Self {
        self.open(OpenNode::Sequence(SequenceNode::new(name)))
    }

    /// Opens a selector.
    pub fn selector(self, name: impl Into<String>) -> Self {
        self.open(OpenNode::Selector(SelectorNode::new(name)))
    }

    /// Opens a parallel node with the given thresholds (0 disables a rule).
    pub fn parallel(self, name: impl Into<String>, num_to_fail: u32, num_to_succeed: u32) -> Self {
        self.open(OpenNode::Parallel(ParallelNode::new(
            name,
            num_to_fail,
            num_to_succeed,
        )))
    }

    /// Grafts a finished tree under the open parent. Does not open a scope.
    pub fn splice(self, subtree: Tree<T>) -> Self {
        self.attach(subtree.kind(), subtree.into_root())
    }

    /// Closes the innermost open parent.
    pub fn end(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        let Some(open) = self.stack.pop() else {
            self.error = Some(BuildError::UnbalancedEnd);
            return self;
        };

        let node = open.into_node();
        tracing::trace!(node = node.name(), kind = %node.kind(), depth = self.stack.len(), "closed node");

        if let Some(parent) = self.stack.last_mut() {
            if let Err(err) = parent.as_parent().add_child(Arc::clone(&node)) {
                self.error = Some(err);
                return self;
            }
        }

        self.current = Some(node);
        self
    }

    /// Finishes construction and returns the last completed root.
    ///
    /// # Errors
    ///
    /// - the first structural error recorded by an earlier call
    /// - [`BuildError::UnclosedNodes`] if parents are still open
    /// - [`BuildError::EmptyTree`] if no node was ever completed
    pub fn build(self) -> Result<Tree<T>> {
        if let Some(err) = self.error {
            return Err(err);
        }

        if !self.stack.is_empty() {
            return Err(BuildError::UnclosedNodes {
                open: self.stack.len(),
            });
        }

        let root = self.current.ok_or(BuildError::EmptyTree)?;
        let tree = Tree::new(root);
        tracing::debug!(
            root = tree.name(),
            kind = %tree.kind(),
            nodes = tree.node_count(),
            "built behavior tree"
        );
        Ok(tree)
    }

    /// Number of parents currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The first structural error recorded so far, if any.
    pub fn error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }

    fn leaf(self, node: ActionNode<T>) -> Self {
        self.attach(NodeKind::Action, Arc::new(node))
    }

    fn attach(mut self, kind: NodeKind, node: NodeRef<T>) -> Self {
        if self.error.is_some() {
            return self;
        }

        let result = match self.stack.last_mut() {
            Some(parent) => parent.as_parent().add_child(node),
            None => Err(BuildError::Unnested {
                kind,
                name: node.name().to_string(),
            }),
        };

        if let Err(err) = result {
            self.error = Some(err);
        }
        self
    }

    fn open(mut self, node: OpenNode<T>) -> Self {
        if self.error.is_some() {
            return self;
        }

        if let Some(parent) = self.stack.last() {
            if let Err(err) = parent.ensure_vacant() {
                self.error = Some(err);
                return self;
            }
        }

        self.stack.push(node);
        tracing::trace!(depth = self.stack.len(), "opened node");
        self
    }
}

impl<T: Copy + 'static> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_builder_has_nothing_to_build() {
        let err = Builder::<f32>::new().build().unwrap_err();
        assert_eq!(err, BuildError::EmptyTree);
    }

    #[test]
    fn depth_follows_open_and_end() {
        let builder = Builder::<f32>::new().sequence("outer").selector("inner");
        assert_eq!(builder.depth(), 2);

        let builder = builder.end();
        assert_eq!(builder.depth(), 1);

        let builder = builder.end();
        assert_eq!(builder.depth(), 0);
        assert!(builder.error().is_none());
    }

    #[test]
    fn end_on_empty_stack_is_rejected() {
        let builder = Builder::<f32>::new().end();
        assert_eq!(builder.error(), Some(&BuildError::UnbalancedEnd));
        assert_eq!(builder.build().unwrap_err(), BuildError::UnbalancedEnd);
    }

    #[test]
    fn first_error_wins() {
        let err = Builder::<f32>::new()
            .action("orphan", |_| Status::Success)
            .end()
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            BuildError::Unnested {
                kind: NodeKind::Action,
                name: "orphan".into(),
            }
        );
    }

    #[test]
    fn parent_opened_under_occupied_inverter_is_rejected() {
        let builder = Builder::<f32>::new()
            .inverter("not")
            .action("leaf", |_| Status::Success)
            .sequence("extra");

        let expected = BuildError::DuplicateChild {
            kind: NodeKind::Inverter,
            parent: "not".into(),
        };
        assert_eq!(builder.depth(), 1);
        assert_eq!(builder.error(), Some(&expected));
        assert_eq!(builder.build().unwrap_err(), expected);
    }

    #[test]
    fn later_top_level_tree_replaces_current() {
        let tree = Builder::<f32>::new()
            .sequence("first")
            .end()
            .selector("second")
            .end()
            .build()
            .unwrap();

        assert_eq!(tree.name(), "second");
        assert_eq!(tree.kind(), NodeKind::Selector);
    }
}
