//! Action nodes for zombie behavior trees.
//!
//! Actions move the zombie or choose where it should go next. Movement
//! actions advance one frame at a time and report `Running` until their goal
//! is reached; target pickers finish immediately.

use behavior_tree::{Behavior, Status};
use rand::Rng;

use crate::geometry::distance_less_than;
use crate::{AgentContext, AnimState, Point};

/// Inclusive bounds for random wander targets.
const WANDER_X: (i32, i32) = (100, 1180);
const WANDER_Y: (i32, i32) = (100, 700);

/// Walks toward the body's current target.
///
/// Returns `Success` once the zombie is within `radius` meters of the target.
///
/// # Example
///
/// ```rust,ignore
/// // Pick a spot, then walk there
/// sequence("wander", vec![
///     action("set random target", SetRandomTarget),
///     action("move to target", MoveToTarget { radius: 0.5 }),
/// ])
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoveToTarget {
    /// Arrival radius in meters.
    pub radius: f32,
}

impl Behavior<AgentContext> for MoveToTarget {
    fn tick(&mut self, ctx: &mut AgentContext) -> Status {
        let target = ctx.body.target;
        ctx.body.state = AnimState::Walk;
        ctx.body.step_toward(target, ctx.dt);

        if distance_less_than(target, ctx.body.position, self.radius) {
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Picks a random point on the field as the new target.
#[derive(Debug, Clone, Copy)]
pub struct SetRandomTarget;

impl Behavior<AgentContext> for SetRandomTarget {
    fn tick(&mut self, ctx: &mut AgentContext) -> Status {
        let rng = ctx.rng();
        let target = Point::new(
            rng.gen_range(WANDER_X.0..=WANDER_X.1) as f32,
            rng.gen_range(WANDER_Y.0..=WANDER_Y.1) as f32,
        );
        ctx.body.target = target;
        tracing::debug!(x = target.x, y = target.y, "wander target selected");
        Status::Success
    }
}

/// Targets the next waypoint of the patrol route.
#[derive(Debug, Clone, Copy)]
pub struct NextPatrolTarget;

impl Behavior<AgentContext> for NextPatrolTarget {
    fn tick(&mut self, ctx: &mut AgentContext) -> Status {
        let waypoint = ctx.body.patrol_cursor();
        ctx.body.target = ctx.body.next_patrol_point();
        tracing::debug!(waypoint, target = ?ctx.body.target, "patrol target selected");
        Status::Success
    }
}

/// Chases the boy.
///
/// Returns `Success` once the zombie is within `radius` meters of the boy.
#[derive(Debug, Clone, Copy)]
pub struct MoveToBoy {
    /// Catch radius in meters.
    pub radius: f32,
}

impl Behavior<AgentContext> for MoveToBoy {
    fn tick(&mut self, ctx: &mut AgentContext) -> Status {
        ctx.body.state = AnimState::Walk;
        ctx.body.step_toward(ctx.boy.position, ctx.dt);

        if ctx.boy_within(self.radius) {
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Runs directly away from the boy.
///
/// Returns `Success` once the boy is at least `safe_distance` meters away.
#[derive(Debug, Clone, Copy)]
pub struct RunAwayFromBoy {
    /// Distance in meters at which the zombie feels safe.
    pub safe_distance: f32,
}

impl Behavior<AgentContext> for RunAwayFromBoy {
    fn tick(&mut self, ctx: &mut AgentContext) -> Status {
        ctx.body.state = AnimState::Walk;
        ctx.body.step_away(ctx.boy.position, ctx.dt);

        if ctx.boy_within(self.safe_distance) {
            Status::Running
        } else {
            Status::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Boy, ZombieBody};

    const DT: f32 = 1.0 / 60.0;

    fn context_at(position: Point) -> AgentContext {
        AgentContext::seeded(ZombieBody::new(position, 0.0), 3)
    }

    #[test]
    fn move_to_target_runs_until_arrival() {
        let mut ctx = context_at(Point::new(100.0, 100.0));
        ctx.body.target = Point::new(130.0, 100.0);
        ctx.dt = DT;
        let mut walk = MoveToTarget { radius: 0.5 };

        // 0.5 m is ~16.7 px; the zombie covers ~1.54 px per frame
        assert_eq!(walk.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.body.state, AnimState::Walk);

        let mut frames = 1;
        while walk.tick(&mut ctx) == Status::Running {
            frames += 1;
            assert!(frames < 100, "zombie never arrived");
        }
        assert!(ctx.body.position.distance(ctx.body.target) < 16.7);
    }

    #[test]
    fn long_frames_do_not_overshoot_the_target() {
        let mut ctx = context_at(Point::new(0.0, 0.0));
        ctx.body.target = Point::new(50.0, 0.0);
        ctx.dt = 1.0;

        assert_eq!(MoveToTarget { radius: 0.5 }.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn long_frames_still_catch_the_boy() {
        let mut ctx = context_at(Point::new(0.0, 0.0));
        ctx.observe(&Boy::new(Point::new(120.0, 0.0), 0), 1.0);
        let mut chase = MoveToBoy { radius: 0.5 };

        assert_eq!(chase.tick(&mut ctx), Status::Running);
        assert_eq!(chase.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn random_target_stays_in_wander_area() {
        let mut ctx = context_at(Point::default());
        for _ in 0..50 {
            assert_eq!(SetRandomTarget.tick(&mut ctx), Status::Success);
            let target = ctx.body.target;
            assert!((100.0..=1180.0).contains(&target.x));
            assert!((100.0..=700.0).contains(&target.y));
        }
    }

    #[test]
    fn patrol_target_follows_route() {
        let mut ctx = context_at(Point::default());
        let route = ctx.body.patrol_route().to_vec();

        for expected in route.iter().chain(route.iter().take(1)) {
            assert_eq!(NextPatrolTarget.tick(&mut ctx), Status::Success);
            assert_eq!(ctx.body.target, *expected);
        }
    }

    #[test]
    fn run_away_succeeds_once_safe() {
        let mut ctx = context_at(Point::new(100.0, 100.0));
        ctx.observe(&Boy::new(Point::new(90.0, 100.0), 0), DT);
        let mut flee = RunAwayFromBoy { safe_distance: 1.0 };

        let mut frames = 0;
        while flee.tick(&mut ctx) == Status::Running {
            frames += 1;
            assert!(frames < 100, "zombie never escaped");
        }
        assert!(ctx.body.position.x > 100.0);
        assert!(!ctx.boy_within(1.0));
    }

    #[test]
    fn move_to_boy_succeeds_when_already_close() {
        let mut ctx = context_at(Point::new(100.0, 100.0));
        ctx.observe(&Boy::new(Point::new(105.0, 100.0), 0), DT);
        assert_eq!(MoveToBoy { radius: 0.5 }.tick(&mut ctx), Status::Success);
    }
}
