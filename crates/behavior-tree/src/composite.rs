//! Composite nodes.
//!
//! Composite nodes control the execution flow of multiple children:
//! [`SequenceNode`] (AND logic), [`SelectorNode`] (OR logic) and
//! [`ParallelNode`] (threshold voting over every child).
//!
//! Children are evaluated in insertion order. None of the composites keep a
//! resume index: every tick starts again from the first child.

use crate::{BuildError, Node, NodeKind, NodeRef, ParentNode, Status, TickError};

/// Executes children in order until one does not succeed.
///
/// # Semantics
///
/// A `SequenceNode` evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops
///   immediately** and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success` (or there are none), the sequence
///   returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct SequenceNode<T> {
    name: String,
    children: Vec<NodeRef<T>>,
}

impl<T> SequenceNode<T> {
    /// Creates a sequence with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

impl<T: Copy> Node<T> for SequenceNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn tick(&self, delta: T) -> Result<Status, TickError> {
        for child in &self.children {
            match child.tick(delta)? {
                Status::Success => continue,
                other => {
                    tracing::trace!(node = %self.name, child = child.name(), status = %other, "sequence stopped");
                    return Ok(other);
                }
            }
        }

        tracing::trace!(node = %self.name, "sequence succeeded");
        Ok(Status::Success)
    }

    fn children(&self) -> &[NodeRef<T>] {
        &self.children
    }
}

impl<T: Copy> ParentNode<T> for SequenceNode<T> {
    fn add_child(&mut self, child: NodeRef<T>) -> Result<(), BuildError> {
        self.children.push(child);
        Ok(())
    }
}

/// Executes children in order until one does not fail.
///
/// # Semantics
///
/// A `SelectorNode` evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure` (or there are none), the selector
///   returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct SelectorNode<T> {
    name: String,
    children: Vec<NodeRef<T>>,
}

impl<T> SelectorNode<T> {
    /// Creates a selector with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

impl<T: Copy> Node<T> for SelectorNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn tick(&self, delta: T) -> Result<Status, TickError> {
        for child in &self.children {
            match child.tick(delta)? {
                Status::Failure => continue,
                other => {
                    tracing::trace!(node = %self.name, child = child.name(), status = %other, "selector stopped");
                    return Ok(other);
                }
            }
        }

        tracing::trace!(node = %self.name, "selector failed");
        Ok(Status::Failure)
    }

    fn children(&self) -> &[NodeRef<T>] {
        &self.children
    }
}

impl<T: Copy> ParentNode<T> for SelectorNode<T> {
    fn add_child(&mut self, child: NodeRef<T>) -> Result<(), BuildError> {
        self.children.push(child);
        Ok(())
    }
}

/// Ticks every child on every tick and votes on the result.
///
/// # Semantics
///
/// All children are ticked in order, regardless of what their siblings
/// return. Afterwards:
/// - If `num_to_succeed > 0` and at least that many children succeeded,
///   returns `Success`
/// - Otherwise, if `num_to_fail > 0` and at least that many children failed,
///   returns `Failure`
/// - Otherwise returns `Running`
///
/// A threshold of 0 disables that rule. The counts only cover the current
/// tick; nothing accumulates across ticks.
pub struct ParallelNode<T> {
    name: String,
    num_to_fail: u32,
    num_to_succeed: u32,
    children: Vec<NodeRef<T>>,
}

impl<T> ParallelNode<T> {
    /// Creates a parallel node with no children and the given thresholds.
    pub fn new(name: impl Into<String>, num_to_fail: u32, num_to_succeed: u32) -> Self {
        Self {
            name: name.into(),
            num_to_fail,
            num_to_succeed,
            children: Vec::new(),
        }
    }

    /// Number of child failures required to fail (0 = never).
    pub fn num_to_fail(&self) -> u32 {
        self.num_to_fail
    }

    /// Number of child successes required to succeed (0 = never).
    pub fn num_to_succeed(&self) -> u32 {
        self.num_to_succeed
    }
}

impl<T: Copy> Node<T> for ParallelNode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Parallel
    }

    fn tick(&self, delta: T) -> Result<Status, TickError> {
        let mut succeeded = 0u32;
        let mut failed = 0u32;

        for child in &self.children {
            match child.tick(delta)? {
                Status::Success => succeeded += 1,
                Status::Failure => failed += 1,
                Status::Running => {}
            }
        }

        let status = if self.num_to_succeed > 0 && succeeded >= self.num_to_succeed {
            Status::Success
        } else if self.num_to_fail > 0 && failed >= self.num_to_fail {
            Status::Failure
        } else {
            Status::Running
        };

        tracing::trace!(node = %self.name, succeeded, failed, %status, "parallel ticked");
        Ok(status)
    }

    fn children(&self) -> &[NodeRef<T>] {
        &self.children
    }
}

impl<T: Copy> ParentNode<T> for ParallelNode<T> {
    fn add_child(&mut self, child: NodeRef<T>) -> Result<(), BuildError> {
        self.children.push(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::ActionNode;

    /// Leaf returning a fixed status and counting its ticks.
    struct Mock {
        calls: Arc<AtomicUsize>,
    }

    impl Mock {
        fn new() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn node(&self, status: Status) -> NodeRef<f32> {
            let calls = Arc::clone(&self.calls);
            Arc::new(ActionNode::new("mock", move |_: f32| {
                calls.fetch_add(1, Ordering::SeqCst);
                status
            }))
        }

        fn times(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn with_children<P: ParentNode<f32>>(mut parent: P, children: Vec<NodeRef<f32>>) -> P {
        for child in children {
            parent.add_child(child).unwrap();
        }
        parent
    }

    #[test]
    fn sequence_runs_all_children_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&order);
        let second = Arc::clone(&order);
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![
                Arc::new(ActionNode::new("a", move |_: f32| {
                    first.lock().unwrap().push("a");
                    Status::Success
                })),
                Arc::new(ActionNode::new("b", move |_: f32| {
                    second.lock().unwrap().push("b");
                    Status::Success
                })),
            ],
        );

        assert_eq!(seq.tick(0.1).unwrap(), Status::Success);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn sequence_running_child_suppresses_later_children() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![m1.node(Status::Running), m2.node(Status::Success)],
        );

        assert_eq!(seq.tick(0.1).unwrap(), Status::Running);
        assert_eq!((m1.times(), m2.times()), (1, 0));
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![m1.node(Status::Failure), m2.node(Status::Success)],
        );

        assert_eq!(seq.tick(0.1).unwrap(), Status::Failure);
        assert_eq!((m1.times(), m2.times()), (1, 0));
    }

    #[test]
    fn sequence_fails_on_second_failure() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![m1.node(Status::Success), m2.node(Status::Failure)],
        );

        assert_eq!(seq.tick(0.1).unwrap(), Status::Failure);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn sequence_restarts_from_first_child_each_tick() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![m1.node(Status::Success), m2.node(Status::Running)],
        );

        seq.tick(0.1).unwrap();
        seq.tick(0.1).unwrap();
        assert_eq!((m1.times(), m2.times()), (2, 2));
    }

    #[test]
    fn empty_sequence_succeeds() {
        let seq = SequenceNode::<f32>::new("empty");
        assert_eq!(seq.tick(0.1).unwrap(), Status::Success);
    }

    #[test]
    fn selector_stops_on_first_success() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let sel = with_children(
            SelectorNode::new("some-selector"),
            vec![m1.node(Status::Success), m2.node(Status::Success)],
        );

        assert_eq!(sel.tick(0.1).unwrap(), Status::Success);
        assert_eq!((m1.times(), m2.times()), (1, 0));
    }

    #[test]
    fn selector_stops_on_first_running() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let sel = with_children(
            SelectorNode::new("some-selector"),
            vec![m1.node(Status::Running), m2.node(Status::Success)],
        );

        assert_eq!(sel.tick(0.1).unwrap(), Status::Running);
        assert_eq!((m1.times(), m2.times()), (1, 0));
    }

    #[test]
    fn selector_tries_next_child_after_failure() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let sel = with_children(
            SelectorNode::new("some-selector"),
            vec![m1.node(Status::Failure), m2.node(Status::Success)],
        );

        assert_eq!(sel.tick(0.1).unwrap(), Status::Success);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let sel = with_children(
            SelectorNode::new("some-selector"),
            vec![m1.node(Status::Failure), m2.node(Status::Failure)],
        );

        assert_eq!(sel.tick(0.1).unwrap(), Status::Failure);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn empty_selector_fails() {
        let sel = SelectorNode::<f32>::new("empty");
        assert_eq!(sel.tick(0.1).unwrap(), Status::Failure);
    }

    #[test]
    fn parallel_without_thresholds_keeps_running() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 0, 0),
            vec![m1.node(Status::Success), m2.node(Status::Success)],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn parallel_fails_when_enough_children_fail() {
        let (m1, m2, m3) = (Mock::new(), Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 2, 2),
            vec![
                m1.node(Status::Failure),
                m2.node(Status::Failure),
                m3.node(Status::Running),
            ],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Failure);
        assert_eq!((m1.times(), m2.times(), m3.times()), (1, 1, 1));
    }

    #[test]
    fn parallel_succeeds_when_enough_children_succeed() {
        let (m1, m2, m3) = (Mock::new(), Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 2, 2),
            vec![
                m1.node(Status::Success),
                m2.node(Status::Success),
                m3.node(Status::Running),
            ],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Success);
        assert_eq!((m1.times(), m2.times(), m3.times()), (1, 1, 1));
    }

    #[test]
    fn parallel_runs_when_no_threshold_is_met() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 2, 2),
            vec![m1.node(Status::Success), m2.node(Status::Failure)],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn parallel_zero_fail_threshold_never_fails() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 0, 5),
            vec![m1.node(Status::Failure), m2.node(Status::Failure)],
        );

        assert_eq!((par.num_to_fail(), par.num_to_succeed()), (0, 5));
        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!((m1.times(), m2.times()), (1, 1));
    }

    #[test]
    fn parallel_zero_succeed_threshold_never_succeeds() {
        let m1 = Mock::new();
        let par = with_children(
            ParallelNode::new("some-parallel", 3, 0),
            vec![m1.node(Status::Success), m1.node(Status::Success)],
        );

        assert_eq!((par.num_to_fail(), par.num_to_succeed()), (3, 0));
        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!(m1.times(), 2);
    }

    #[test]
    fn parallel_success_takes_priority_over_failure() {
        let (m1, m2) = (Mock::new(), Mock::new());
        let par = with_children(
            ParallelNode::new("some-parallel", 1, 1),
            vec![m1.node(Status::Failure), m2.node(Status::Success)],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Success);
    }

    #[test]
    fn parallel_counts_reset_every_tick() {
        let m1 = Mock::new();
        let par = with_children(
            ParallelNode::new("some-parallel", 0, 2),
            vec![m1.node(Status::Success)],
        );

        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!(par.tick(0.1).unwrap(), Status::Running);
        assert_eq!(m1.times(), 2);
    }

    #[test]
    fn leaf_error_stops_the_tick() {
        let m2 = Mock::new();
        let seq = with_children(
            SequenceNode::new("some-sequence"),
            vec![
                Arc::new(ActionNode::fallible("broken", |_: f32| -> Result<Status, &'static str> {
                    Err("boom")
                })),
                m2.node(Status::Success),
            ],
        );

        let err = seq.tick(0.1).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(m2.times(), 0);
    }
}
