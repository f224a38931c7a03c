//! Error types raised while building or ticking a tree.
//!
//! Structural mistakes made while assembling a tree surface as
//! [`BuildError`]. Errors during evaluation surface as [`TickError`]: either a
//! malformed node discovered at tick time, or an error returned by a leaf
//! function, which is passed through untouched.

use thiserror::Error;

use crate::node::NodeKind;

/// Error type produced by fallible leaf functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the builder and by `ParentNode::add_child`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A leaf or spliced subtree was added while no parent was open.
    #[error("can't add an unnested {kind} node '{name}', it must have an open parent")]
    Unnested { kind: NodeKind, name: String },

    /// A single-child node was given a second child.
    #[error("can't add more than a single child to {kind} node '{parent}'")]
    DuplicateChild { kind: NodeKind, parent: String },

    /// `end` was called with no open parent.
    #[error("can't end a node, no parent node is open")]
    UnbalancedEnd,

    /// `build` was called while parent nodes were still open.
    #[error("can't build an unbalanced tree, {open} parent node(s) still open")]
    UnclosedNodes { open: usize },

    /// `build` was called before any node was completed.
    #[error("can't create a behavior tree with zero nodes")]
    EmptyTree,
}

impl BuildError {
    /// Stable identifier for this error, suitable for matching in logs.
    pub fn code(&self) -> &'static str {
        use BuildError::*;
        match self {
            Unnested { .. } => "BUILD_UNNESTED",
            DuplicateChild { .. } => "BUILD_DUPLICATE_CHILD",
            UnbalancedEnd => "BUILD_UNBALANCED_END",
            UnclosedNodes { .. } => "BUILD_UNCLOSED_NODES",
            EmptyTree => "BUILD_EMPTY_TREE",
        }
    }
}

/// Errors surfaced while ticking a tree.
#[derive(Debug, Error)]
pub enum TickError {
    /// A single-child node was ticked without a child.
    #[error("{kind} node '{name}' must have a child node")]
    MissingChild { kind: NodeKind, name: String },

    /// Error returned by a leaf function, passed through unchanged.
    #[error(transparent)]
    Action(BoxError),
}

impl TickError {
    /// Stable identifier for this error, suitable for matching in logs.
    pub fn code(&self) -> &'static str {
        match self {
            TickError::MissingChild { .. } => "TICK_MISSING_CHILD",
            TickError::Action(_) => "TICK_ACTION",
        }
    }

    /// Returns the leaf error if this error came from a leaf function.
    pub fn into_action_error(self) -> Option<BoxError> {
        match self {
            TickError::Action(err) => Some(err),
            TickError::MissingChild { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
