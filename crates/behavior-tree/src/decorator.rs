//! Decorator nodes.
//!
//! Decorators wrap a single child and transform its result. This module
//! provides [`InverterNode`] (NOT logic).

use crate::{BuildError, Node, NodeKind, NodeRef, ParentNode, Status, TickError};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` is passed through unchanged
///
/// The child is ticked exactly once per tick of the inverter.
pub struct InverterNode<T> {
    name: String,
    child: Option<NodeRef<T>>,
}

impl<T> InverterNode<T> {
    /// Creates an inverter without a child. Ticking it before a child is
    /// attached fails with [`TickError::MissingChild`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            child: None,
        }
    }

    /// Fails with [`BuildError::DuplicateChild`] once a child is attached.
    pub fn ensure_vacant(&self) -> Result<(), BuildError> {
        if self.child.is_some() {
            return Err(BuildError::DuplicateChild {
                kind: NodeKind::Inverter,
                parent: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl<T> Node<T> for InverterNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Inverter
    }

    fn tick(&self, delta: T) -> Result<Status, TickError> {
        let child = self.child.as_ref().ok_or_else(|| TickError::MissingChild {
            kind: NodeKind::Inverter,
            name: self.name.clone(),
        })?;

        let status = child.tick(delta)?.invert();
        tracing::trace!(node = %self.name, %status, "inverter ticked");
        Ok(status)
    }

    fn children(&self) -> &[NodeRef<T>] {
        self.child.as_slice()
    }
}

impl<T> ParentNode<T> for InverterNode<T> {
    fn add_child(&mut self, child: NodeRef<T>) -> Result<(), BuildError> {
        self.ensure_vacant()?;
        self.child = Some(child);
        Ok(())
    }
}
