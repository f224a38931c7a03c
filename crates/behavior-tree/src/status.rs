//! Status returned by behavior nodes.

/// The result of ticking a node.
///
/// Every node reports one of three outcomes. `Running` means the node has
/// not finished yet; it is a plain value and carries no resume state, so the
/// next tick evaluates the subtree from the start again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The node completed successfully.
    ///
    /// For conditions: the predicate held.
    /// For actions: the work is done.
    Success,

    /// The node failed.
    ///
    /// For conditions: the predicate did not hold.
    /// For actions: the work could not be done.
    Failure,

    /// The node is still in progress and should be ticked again.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`; `Running` is returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Maps a predicate result onto `Success` / `Failure`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}
