//! Per-zombie context handed to every leaf.
//!
//! The [`AgentContext`] holds exactly what the leaves need and nothing
//! else: the zombie's own body, the latest view of the boy, the frame's
//! delta time and the zombie's random number generator. It replaces both the
//! closures-over-self and the global frame clock a game loop would otherwise
//! lean on, so every leaf can be exercised in isolation.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::geometry::distance_less_than;
use crate::{Boy, ZombieBody};

#[derive(Debug)]
pub struct AgentContext {
    /// The zombie's own state. Actions move it; conditions only read it.
    pub body: ZombieBody,

    /// Snapshot of the boy taken at the start of the frame.
    pub boy: Boy,

    /// Seconds elapsed since the previous frame.
    pub dt: f32,

    rng: SmallRng,
}

impl AgentContext {
    pub fn new(body: ZombieBody, rng: SmallRng) -> Self {
        Self {
            body,
            boy: Boy::default(),
            dt: 0.0,
            rng,
        }
    }

    /// Convenience for tests and tools: a context with a seeded generator.
    pub fn seeded(body: ZombieBody, seed: u64) -> Self {
        Self::new(body, SmallRng::seed_from_u64(seed))
    }

    /// Refreshes the per-frame inputs.
    pub fn observe(&mut self, boy: &Boy, dt: f32) {
        self.boy = *boy;
        self.dt = dt;
    }

    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Whether the boy is closer than `meters`.
    pub fn boy_within(&self, meters: f32) -> bool {
        distance_less_than(self.boy.position, self.body.position, meters)
    }
}
