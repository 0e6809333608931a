//! The zombie entity.

use behavior_tree::{BehaviorTree, ConfigError, Node, Status};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{AgentContext, Boy, Point, ZombieBody, presets};

/// A zombie: its body plus the behavior tree that drives it.
///
/// The tree is built once at construction and bound to this zombie for its
/// whole life.
#[derive(Debug)]
pub struct Zombie {
    ctx: AgentContext,
    brain: BehaviorTree<AgentContext>,
}

impl Zombie {
    /// Spawns a zombie and builds its tree.
    ///
    /// `seed` drives both the spawn randomness and the zombie's decisions,
    /// so equal seeds give equal zombies. A `None` position spawns at a
    /// random spot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `brain` is malformed (e.g. an empty
    /// composite). Such a zombie is never created.
    pub fn new(
        seed: u64,
        position: Option<Point>,
        brain: Node<AgentContext>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_tree(seed, position, BehaviorTree::new(brain)?))
    }

    /// Spawns a zombie around an already built tree.
    pub fn with_tree(
        seed: u64,
        position: Option<Point>,
        brain: BehaviorTree<AgentContext>,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let body = ZombieBody::spawn(position, &mut rng);
        tracing::debug!(seed, position = ?body.position, nodes = brain.len(), "zombie spawned");
        Self {
            ctx: AgentContext::new(body, rng),
            brain,
        }
    }

    /// Spawns a zombie running the default [`presets::zombie`] tree.
    pub fn with_default_brain(seed: u64, position: Option<Point>) -> Result<Self, ConfigError> {
        Self::new(seed, position, presets::zombie())
    }

    /// Advances the zombie by one frame.
    ///
    /// Refreshes what the zombie knows about the boy, advances its animation,
    /// then ticks the behavior tree exactly once. The returned status is
    /// informational; the zombie's behavior is carried by its leaves.
    pub fn update(&mut self, boy: &Boy, dt: f32) -> Status {
        self.ctx.observe(boy, dt);
        self.ctx.body.advance_animation(dt);
        self.brain.run(&mut self.ctx)
    }

    /// Called by the host when a ball hits this zombie.
    pub fn collect_ball(&mut self) {
        self.ctx.body.collect_ball();
    }

    pub fn body(&self) -> &ZombieBody {
        &self.ctx.body
    }

    pub fn brain(&self) -> &BehaviorTree<AgentContext> {
        &self.brain
    }
}

#[cfg(test)]
mod tests {
    use behavior_tree::builder::sequence;

    use super::*;
    use crate::AnimState;

    #[test]
    fn malformed_brain_aborts_construction() {
        let err = Zombie::new(0, None, sequence("nothing", vec![])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyComposite { .. }));
    }

    #[test]
    fn same_seed_same_zombie() {
        let a = Zombie::with_default_brain(9, None).unwrap();
        let b = Zombie::with_default_brain(9, None).unwrap();
        assert_eq!(a.body().position, b.body().position);
        assert_eq!(a.body().frame, b.body().frame);
    }

    #[test]
    fn update_advances_animation_and_walks() {
        let mut zombie = Zombie::with_default_brain(1, Some(Point::new(100.0, 100.0))).unwrap();
        let far_boy = Boy::new(Point::new(1200.0, 900.0), 0);
        let frame = zombie.body().frame;

        assert_eq!(zombie.update(&far_boy, 0.05), Status::Running);
        assert_eq!(zombie.body().state, AnimState::Walk);
        assert_ne!(zombie.body().frame, frame);
        assert_ne!(zombie.body().position, Point::new(100.0, 100.0));
    }

    #[test]
    fn collected_balls_are_counted() {
        let mut zombie = Zombie::with_default_brain(0, None).unwrap();
        zombie.collect_ball();
        assert_eq!(zombie.body().ball_count, 1);
    }
}
