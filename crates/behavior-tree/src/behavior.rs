//! Leaf traits.
//!
//! This module defines [`Behavior`], implemented by action leaves, and
//! [`Predicate`], implemented by condition leaves. Both are generic over a
//! context type `C` supplied by the owning agent on every tick, so leaves
//! never capture the agent itself.

use crate::Status;

/// An action leaf that can be ticked against a context.
pub trait Behavior<C>: Send {
    /// Perform one frame's worth of the action.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the agent context. Actions read and
    ///   modify agent state through it (e.g., to move one step).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the action reached its goal
    /// - `Status::Running` if the action needs more frames
    /// - `Status::Failure` if a precondition cannot be satisfied
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Blanket implementation for closures.
///
/// This allows `|ctx: &mut C| Status::Success` to be used directly as an
/// action leaf.
impl<C, F> Behavior<C> for F
where
    F: FnMut(&mut C) -> Status + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        self(ctx)
    }
}

/// A condition leaf.
///
/// Conditions only observe the context, so they can neither mutate agent
/// state nor report `Running`.
pub trait Predicate<C>: Send {
    /// Returns `true` if the condition holds for `ctx`.
    fn check(&self, ctx: &C) -> bool;
}

impl<C, F> Predicate<C> for F
where
    F: Fn(&C) -> bool + Send,
{
    #[inline]
    fn check(&self, ctx: &C) -> bool {
        self(ctx)
    }
}
