//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the evaluation loop shared by [`Policy::Sequence`]
//! (AND logic) and [`Policy::Selector`] (OR logic).
//!
//! # Resumption
//!
//! Every composite keeps a cursor: the index of the child to tick first on
//! the next call. The cursor only moves forward while the composite is
//! `Running` and is reset to 0 whenever the composite returns `Success` or
//! `Failure`. A child that reported `Running` is therefore ticked again on the
//! next frame without re-running the siblings that already finished before it.

use crate::{NodeId, Status};

/// How a composite combines the statuses of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Policy {
    /// Ticks children in order until one fails.
    ///
    /// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
    /// - If a child returns `Success`, the sequence **continues** to the next child in the same tick
    /// - If a child returns `Running`, the sequence returns `Running` and resumes there next tick
    /// - If all children return `Success`, the sequence returns `Success`
    ///
    /// This is analogous to a short-circuited logical AND (&&) operation.
    #[default]
    Sequence,

    /// Ticks children in order until one succeeds.
    ///
    /// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
    /// - If a child returns `Failure`, the selector **continues** to the next child in the same tick
    /// - If a child returns `Running`, the selector returns `Running` and resumes there next tick
    /// - If all children return `Failure`, the selector returns `Failure`
    ///
    /// This is analogous to a short-circuited logical OR (||) operation.
    Selector,
}

impl Policy {
    /// The child status that ends the composite immediately.
    #[inline]
    pub fn short_circuit(self) -> Status {
        match self {
            Policy::Sequence => Status::Failure,
            Policy::Selector => Status::Success,
        }
    }

    /// The child status that moves the cursor to the next child.
    ///
    /// Also the composite's result once every child reported it.
    #[inline]
    pub fn advance_on(self) -> Status {
        match self {
            Policy::Sequence => Status::Success,
            Policy::Selector => Status::Failure,
        }
    }
}

/// Arena-side state of a Sequence or Selector.
#[derive(Debug, Default)]
pub(crate) struct Composite {
    policy: Policy,
    children: Vec<NodeId>,
    cursor: usize,
}

impl Composite {
    /// `children` must be non-empty; the tree builder guarantees it.
    pub(crate) fn new(policy: Policy, children: Vec<NodeId>) -> Self {
        debug_assert!(!children.is_empty(), "composite must have at least one child");
        Self {
            policy,
            children,
            cursor: 0,
        }
    }

    pub(crate) fn policy(&self) -> Policy {
        self.policy
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ticks children from the cursor onward, using `tick_child` to evaluate
    /// each one, until the composite has a result for this frame.
    pub(crate) fn tick(&mut self, mut tick_child: impl FnMut(NodeId) -> Status) -> Status {
        loop {
            let status = tick_child(self.children[self.cursor]);

            if status.is_running() {
                // Hold the cursor: the same child resumes next frame
                return Status::Running;
            }

            if status == self.policy.short_circuit() {
                self.cursor = 0;
                return status;
            }

            self.cursor += 1;
            if self.cursor == self.children.len() {
                self.cursor = 0;
                return self.policy.advance_on();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<NodeId> {
        (1..=n).map(NodeId).collect()
    }

    /// Replays scripted statuses per child and records the tick order.
    struct Script {
        outcomes: Vec<Vec<Status>>,
        ticked: Vec<NodeId>,
    }

    impl Script {
        fn new(outcomes: Vec<Vec<Status>>) -> Self {
            Self {
                outcomes,
                ticked: Vec::new(),
            }
        }

        fn tick(&mut self, id: NodeId) -> Status {
            self.ticked.push(id);
            self.outcomes[id.index() - 1].remove(0)
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Composite::new(Policy::Sequence, ids(2));
        let mut script = Script::new(vec![vec![Status::Success], vec![Status::Success]]);

        assert_eq!(seq.tick(|id| script.tick(id)), Status::Success);
        assert_eq!(script.ticked, ids(2));
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Composite::new(Policy::Sequence, ids(3));
        let mut script = Script::new(vec![
            vec![Status::Success],
            vec![Status::Failure],
            vec![], // Should not execute
        ]);

        assert_eq!(seq.tick(|id| script.tick(id)), Status::Failure);
        assert_eq!(script.ticked, ids(2));
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_holds_cursor_on_running() {
        let mut seq = Composite::new(Policy::Sequence, ids(2));
        let mut script = Script::new(vec![
            vec![Status::Success],
            vec![Status::Running, Status::Success],
        ]);

        assert_eq!(seq.tick(|id| script.tick(id)), Status::Running);
        assert_eq!(seq.cursor(), 1);

        assert_eq!(seq.tick(|id| script.tick(id)), Status::Success);
        assert_eq!(script.ticked, vec![NodeId(1), NodeId(2), NodeId(2)]);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Composite::new(Policy::Selector, ids(3));
        let mut script = Script::new(vec![
            vec![Status::Failure],
            vec![Status::Success],
            vec![], // Should not execute
        ]);

        assert_eq!(sel.tick(|id| script.tick(id)), Status::Success);
        assert_eq!(script.ticked, ids(2));
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Composite::new(Policy::Selector, ids(2));
        let mut script = Script::new(vec![vec![Status::Failure], vec![Status::Failure]]);

        assert_eq!(sel.tick(|id| script.tick(id)), Status::Failure);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn selector_resumes_running_alternative() {
        let mut sel = Composite::new(Policy::Selector, ids(2));
        let mut script = Script::new(vec![
            vec![Status::Failure],
            vec![Status::Running, Status::Failure],
        ]);

        assert_eq!(sel.tick(|id| script.tick(id)), Status::Running);
        assert_eq!(sel.cursor(), 1);

        // The first alternative is not retried while the second is running
        assert_eq!(sel.tick(|id| script.tick(id)), Status::Failure);
        assert_eq!(script.ticked, vec![NodeId(1), NodeId(2), NodeId(2)]);
        assert_eq!(sel.cursor(), 0);
    }
}
