//! Reactive behavior trees assembled through a fluent builder.
//!
//! A tree is built once from primitive nodes and then ticked by an external
//! driver, once per time step. Every tick walks the tree synchronously and
//! returns a [`Status`]:
//!
//! - **Tri-state results**: `Success`, `Failure` or `Running`
//! - **Stateless ticks**: composites keep no resume index, every tick starts
//!   over at the first child
//! - **Opaque time delta**: the delta type `T` is passed unchanged to every
//!   leaf and never interpreted by the tree
//! - **Immutable after build**: nodes are shared behind `Arc` and never
//!   mutated once a tree is finished
//!
//! # Architecture
//!
//! - [`Node`] / [`ParentNode`]: core traits for all nodes
//! - Leaf: [`ActionNode`] (conditions are actions wrapping a predicate)
//! - Decorator: [`InverterNode`]
//! - Composites: [`SequenceNode`], [`SelectorNode`], [`ParallelNode`]
//! - [`Builder`]: stack-based fluent assembler producing a [`Tree`]

pub mod action;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use action::ActionNode;
pub use builder::Builder;
pub use composite::{ParallelNode, SelectorNode, SequenceNode};
pub use decorator::InverterNode;
pub use error::{BoxError, BuildError, TickError};
pub use node::{Node, NodeKind, NodeRef, ParentNode};
pub use status::Status;
pub use tree::Tree;
