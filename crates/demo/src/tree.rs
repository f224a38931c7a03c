//! The demo tree.
//!
//! ```text
//! Sequence "My-Sequence"
//! ├── Action-1
//! ├── Action-2
//! └── Parallel "Make-Parallel" (fail: 0, succeed: 0)
//!     ├── Sequence "Seq1": delta < threshold, then Action-3
//!     └── Sequence "Seq2": delta > threshold, then Action-4
//! ```
//!
//! With both parallel thresholds disabled the parallel node, and therefore
//! the root, always reports `Running`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fluent_behavior_tree::{BuildError, Builder, Status, Tree};

use crate::config::DemoConfig;

/// Number of times each demo action ran.
#[derive(Debug, Default)]
pub struct ActionLog {
    counts: [AtomicUsize; 4],
}

impl ActionLog {
    fn record(&self, action: usize) {
        self.counts[action - 1].fetch_add(1, Ordering::Relaxed);
    }

    /// Invocation count of `Action-<action>` (1-based).
    pub fn count(&self, action: usize) -> usize {
        self.counts[action - 1].load(Ordering::Relaxed)
    }
}

fn act(
    action: usize,
    quiet: bool,
    log: &Arc<ActionLog>,
) -> impl Fn(f32) -> Status + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |_| {
        if !quiet {
            println!("Do Action-{action}");
        }
        log.record(action);
        Status::Success
    }
}

/// Builds the demo tree, recording every action invocation in `log`.
#[rustfmt::skip]
pub fn start_up(config: &DemoConfig, log: &Arc<ActionLog>) -> Result<Tree<f32>, BuildError> {
    let threshold = config.threshold;
    let quiet = config.quiet;

    Builder::new()
        .sequence("My-Sequence")
            .action("Action-1", act(1, quiet, log))
            .action("Action-2", act(2, quiet, log))
            .parallel("Make-Parallel", 0, 0)
                .sequence("Seq1")
                    .condition("Condition-for-Action-3", move |delta| delta < threshold)
                    .action("Action-3", act(3, quiet, log))
                .end()
                .sequence("Seq2")
                    .condition("Condition-for-Action-4", move |delta| delta > threshold)
                    .action("Action-4", act(4, quiet, log))
                .end()
            .end()
        .end()
        .build()
}
