//! Condition nodes for zombie behavior trees.
//!
//! Condition nodes check the context and pass or fail.
//! They never move the zombie or change its target.

use behavior_tree::Predicate;

use crate::AgentContext;

/// Checks if the boy is within `radius` meters.
///
/// # Example
///
/// ```rust,ignore
/// // Chase the boy if he is close
/// sequence("chase boy", vec![
///     condition("boy nearby", IsBoyNearby { radius: 7.0 }),
///     action("move to boy", MoveToBoy { radius: 0.5 }),
/// ])
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IsBoyNearby {
    /// Detection radius in meters.
    pub radius: f32,
}

impl Predicate<AgentContext> for IsBoyNearby {
    fn check(&self, ctx: &AgentContext) -> bool {
        ctx.boy_within(self.radius)
    }
}

/// Checks if the zombie has collected at least as many balls as the boy.
#[derive(Debug, Clone, Copy)]
pub struct IsZombieStronger;

impl Predicate<AgentContext> for IsZombieStronger {
    fn check(&self, ctx: &AgentContext) -> bool {
        ctx.body.ball_count >= ctx.boy.ball_count
    }
}
