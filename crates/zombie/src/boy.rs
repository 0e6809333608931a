//! The tracked agent zombies react to.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Public state of the boy, as seen by zombies.
///
/// Zombies only ever read this; the owner of the boy copies it into each
/// zombie's context once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Boy {
    pub position: Point,
    pub ball_count: u32,
}

impl Boy {
    pub const fn new(position: Point, ball_count: u32) -> Self {
        Self {
            position,
            ball_count,
        }
    }
}
