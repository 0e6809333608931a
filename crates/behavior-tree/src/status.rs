//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Frame-based Semantics
///
/// A tree is ticked once per frame. Work that cannot finish within one frame
/// reports [`Status::Running`] and is ticked again on the next frame:
/// - Conditions evaluate immediately (e.g., "Is the boy nearby?")
/// - Actions may span several frames (e.g., "Walk to the target")
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The effect reached its goal.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: A precondition could not be satisfied.
    Failure,

    /// The behavior has not finished yet.
    ///
    /// Only actions and composites report this. The same node is ticked
    /// again on the next frame.
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

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    /// Maps a predicate outcome onto `Success`/`Failure`.
    #[inline]
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
