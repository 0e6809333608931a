//! Zombie body state.
//!
//! Everything the behavior tree's leaves read or move lives here: position,
//! heading, current target and the patrol route. Drawing and collision boxes
//! belong to the host game and are not modeled.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, RUN_SPEED_PPS};

/// Animation timing.
pub const TIME_PER_ACTION: f32 = 0.5;
pub const ACTION_PER_TIME: f32 = 1.0 / TIME_PER_ACTION;
pub const FRAMES_PER_ACTION: f32 = 10.0;

/// Where a zombie heads before its tree picks anything.
pub const INITIAL_TARGET: Point = Point::new(700.0, 700.0);

/// Default patrol route.
pub const PATROL_ROUTE: [Point; 4] = [
    Point::new(43.0, 274.0),
    Point::new(1118.0, 193.0),
    Point::new(234.0, 987.0),
    Point::new(768.0, 444.0),
];

/// Inclusive spawn bounds used when no position is given.
const SPAWN_X: (i32, i32) = (100, 1180);
const SPAWN_Y: (i32, i32) = (100, 924);

/// Animation being played.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
}

#[derive(Debug, Clone)]
pub struct ZombieBody {
    pub position: Point,
    /// Radians; `cos(heading) < 0` means the sprite faces left.
    pub heading: f32,
    /// Pixels per second.
    pub speed: f32,
    pub state: AnimState,
    /// Animation frame in `[0, FRAMES_PER_ACTION)`.
    pub frame: f32,
    pub ball_count: u32,
    pub target: Point,
    patrol: &'static [Point],
    patrol_cursor: usize,
}

impl ZombieBody {
    /// Creates an idle body at `position` heading for [`INITIAL_TARGET`].
    ///
    /// `frame` is wrapped into `[0, FRAMES_PER_ACTION)`.
    pub fn new(position: Point, frame: f32) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
            state: AnimState::Idle,
            frame: frame.rem_euclid(FRAMES_PER_ACTION),
            ball_count: 0,
            target: INITIAL_TARGET,
            patrol: &PATROL_ROUTE,
            patrol_cursor: 0,
        }
    }

    /// Creates a body at `position`, or at a random spot when `None`, with a
    /// random starting animation frame.
    pub fn spawn(position: Option<Point>, rng: &mut impl Rng) -> Self {
        let position = position.unwrap_or_else(|| {
            Point::new(
                rng.gen_range(SPAWN_X.0..=SPAWN_X.1) as f32,
                rng.gen_range(SPAWN_Y.0..=SPAWN_Y.1) as f32,
            )
        });
        let frame = rng.gen_range(0..=9) as f32;
        Self::new(position, frame)
    }

    pub fn patrol_route(&self) -> &[Point] {
        self.patrol
    }

    /// Index of the waypoint the next patrol leg will head to.
    pub fn patrol_cursor(&self) -> usize {
        self.patrol_cursor
    }

    /// Returns the current waypoint and moves the cursor to the next one.
    pub fn next_patrol_point(&mut self) -> Point {
        let point = self.patrol[self.patrol_cursor];
        self.patrol_cursor = (self.patrol_cursor + 1) % self.patrol.len();
        point
    }

    pub fn advance_animation(&mut self, dt: f32) {
        self.frame = (self.frame + FRAMES_PER_ACTION * ACTION_PER_TIME * dt) % FRAMES_PER_ACTION;
    }

    /// Runs one frame toward `point`, stopping on it rather than past it.
    pub fn step_toward(&mut self, point: Point, dt: f32) {
        self.heading = self.position.heading_to(point);
        let remaining = self.position.distance(point);
        self.run(dt, remaining);
    }

    /// Runs one frame directly away from `point`.
    pub fn step_away(&mut self, point: Point, dt: f32) {
        self.heading = point.heading_to(self.position);
        self.run(dt, f32::INFINITY);
    }

    fn run(&mut self, dt: f32, max_distance: f32) {
        self.speed = RUN_SPEED_PPS;
        let step = (self.speed * dt).min(max_distance);
        self.position = self.position.advanced(self.heading, step);
    }

    /// Called by the host when a ball hits this zombie.
    pub fn collect_ball(&mut self) {
        self.ball_count += 1;
    }

    /// Whether the sprite should be mirrored.
    pub fn faces_left(&self) -> bool {
        self.heading.cos() < 0.0
    }
}
