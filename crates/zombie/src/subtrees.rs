//! Reusable behavior tree subtrees.
//!
//! Each function returns a fresh blueprint, so the same pattern can be
//! placed in several trees (or several times in one tree) without sharing
//! nodes.
//!
//! # Naming Convention
//!
//! Patterns are named after what the zombie is seen doing (`wander`,
//! `patrol`, `chase_boy`).

use behavior_tree::Node;
use behavior_tree::builder::{action, condition, selector, sequence};

use crate::AgentContext;
use crate::nodes::{
    IsBoyNearby, IsZombieStronger, MoveToBoy, MoveToTarget, NextPatrolTarget, RunAwayFromBoy,
    SetRandomTarget,
};

/// Arrival radius for walking to a point or catching the boy, in meters.
pub const ARRIVAL_RADIUS: f32 = 0.5;

/// How close the boy must be before a zombie reacts to him, in meters.
pub const DETECTION_RADIUS: f32 = 7.0;

/// How far a fleeing zombie runs before it calms down, in meters.
pub const SAFE_DISTANCE: f32 = 7.0;

/// Walk to a random spot.
pub fn wander() -> Node<AgentContext> {
    sequence(
        "wander",
        vec![
            action("set random target", SetRandomTarget),
            action(
                "move to target",
                MoveToTarget {
                    radius: ARRIVAL_RADIUS,
                },
            ),
        ],
    )
}

/// Walk to the next waypoint of the patrol route.
pub fn patrol() -> Node<AgentContext> {
    sequence(
        "patrol",
        vec![
            action("next patrol target", NextPatrolTarget),
            action(
                "move to target",
                MoveToTarget {
                    radius: ARRIVAL_RADIUS,
                },
            ),
        ],
    )
}

/// Chase the boy while he is within `DETECTION_RADIUS`.
pub fn chase_boy() -> Node<AgentContext> {
    sequence(
        "chase boy",
        vec![
            condition(
                "boy nearby",
                IsBoyNearby {
                    radius: DETECTION_RADIUS,
                },
            ),
            move_to_boy(),
        ],
    )
}

/// Chase the boy if the zombie is at least as strong, otherwise run away.
pub fn chase_or_flee() -> Node<AgentContext> {
    selector(
        "chase or flee",
        vec![
            sequence(
                "chase if stronger",
                vec![condition("zombie stronger", IsZombieStronger), move_to_boy()],
            ),
            sequence(
                "run away from boy",
                vec![action(
                    "run away",
                    RunAwayFromBoy {
                        safe_distance: SAFE_DISTANCE,
                    },
                )],
            ),
        ],
    )
}

/// React to the boy (chase or flee) while he is within `DETECTION_RADIUS`.
pub fn react_to_boy() -> Node<AgentContext> {
    sequence(
        "react to nearby boy",
        vec![
            condition(
                "boy nearby",
                IsBoyNearby {
                    radius: DETECTION_RADIUS,
                },
            ),
            chase_or_flee(),
        ],
    )
}

fn move_to_boy() -> Node<AgentContext> {
    action(
        "move to boy",
        MoveToBoy {
            radius: ARRIVAL_RADIUS,
        },
    )
}
