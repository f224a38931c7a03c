//! Leaf nodes.
//!
//! An [`ActionNode`] wraps a user-supplied function and returns whatever the
//! function returns. Conditions are not a separate type: a predicate is
//! wrapped into an action that maps `true` to `Success` and `false` to
//! `Failure`.

use crate::{BoxError, Node, NodeKind, Status, TickError};

type ActionFn<T> = Box<dyn Fn(T) -> Result<Status, BoxError> + Send + Sync>;

/// Leaf node delegating its tick to a function of the time delta.
pub struct ActionNode<T> {
    name: String,
    action: ActionFn<T>,
}

impl<T: 'static> ActionNode<T> {
    /// Creates an action from an infallible function.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(T) -> Status + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(move |delta| Ok(action(delta))),
        }
    }

    /// Creates an action from a function that may fail.
    ///
    /// The error is returned from `tick` as [`TickError::Action`] and travels
    /// up through every ancestor unchanged.
    pub fn fallible<F, E>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(T) -> Result<Status, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            action: Box::new(move |delta| action(delta).map_err(Into::into)),
        }
    }

    /// Creates a condition: `Success` when the predicate holds, `Failure`
    /// otherwise.
    pub fn condition<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(T) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |delta| Status::from_bool(predicate(delta)))
    }

    /// Creates a condition from a predicate that may fail.
    pub fn try_condition<P, E>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(T) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::fallible(name, move |delta| predicate(delta).map(Status::from_bool))
    }
}

impl<T> Node<T> for ActionNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    #[inline]
    fn tick(&self, delta: T) -> Result<Status, TickError> {
        (self.action)(delta).map_err(TickError::Action)
    }
}
