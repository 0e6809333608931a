//! Leaf registry for data-driven zombie trees.
//!
//! | Key                  | Kind      | Arguments                        |
//! |----------------------|-----------|----------------------------------|
//! | `move_to_target`     | action    | radius (m, > 0, default 0.5)     |
//! | `set_random_target`  | action    | none                             |
//! | `next_patrol_target` | action    | none                             |
//! | `move_to_boy`        | action    | radius (m, > 0, default 0.5)     |
//! | `run_away_from_boy`  | action    | safe distance (m, default 7)     |
//! | `is_boy_nearby`      | condition | radius (m, > 0, required)        |
//! | `is_zombie_stronger` | condition | none                             |

use std::path::Path;

use behavior_tree::{BehaviorTree, LeafRegistry, NodeDef};

use crate::AgentContext;
use crate::error::{Result, ZombieError};
use crate::nodes::{
    IsBoyNearby, IsZombieStronger, MoveToBoy, MoveToTarget, NextPatrolTarget, RunAwayFromBoy,
    SetRandomTarget,
};
use crate::subtrees::{ARRIVAL_RADIUS, SAFE_DISTANCE};

/// RON definition of the default zombie tree.
pub const DEFAULT_TREE: &str = include_str!("../trees/zombie.ron");

/// Registry with every zombie leaf.
pub fn registry() -> LeafRegistry<AgentContext> {
    let mut registry = LeafRegistry::new();
    registry
        .register_action("move_to_target", |args| {
            Ok(MoveToTarget {
                radius: args.radius(0, "radius", Some(ARRIVAL_RADIUS))?,
            })
        })
        .register_action("set_random_target", |_| Ok(SetRandomTarget))
        .register_action("next_patrol_target", |_| Ok(NextPatrolTarget))
        .register_action("move_to_boy", |args| {
            Ok(MoveToBoy {
                radius: args.radius(0, "radius", Some(ARRIVAL_RADIUS))?,
            })
        })
        .register_action("run_away_from_boy", |args| {
            Ok(RunAwayFromBoy {
                safe_distance: args.distance(0, "safe distance", Some(SAFE_DISTANCE))?,
            })
        })
        .register_condition("is_boy_nearby", |args| {
            Ok(IsBoyNearby {
                radius: args.radius(0, "radius", None)?,
            })
        })
        .register_condition("is_zombie_stronger", |_| Ok(IsZombieStronger));
    registry
}

/// Builds the default tree from [`DEFAULT_TREE`].
pub fn default_tree() -> Result<BehaviorTree<AgentContext>> {
    let def = NodeDef::from_ron(DEFAULT_TREE)?;
    Ok(registry().build_tree(&def)?)
}

/// Reads a RON tree definition from `path` without building it.
///
/// Useful when many zombies share one file: parse once, then build each
/// tree with [`registry`].
pub fn load_def(path: &Path) -> Result<NodeDef> {
    let text = std::fs::read_to_string(path).map_err(|source| ZombieError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(NodeDef::from_ron(&text)?)
}

/// Reads a RON tree definition from `path` and builds it.
pub fn load_tree(path: &Path) -> Result<BehaviorTree<AgentContext>> {
    let def = load_def(path)?;
    let tree = registry().build_tree(&def)?;
    tracing::info!(path = %path.display(), nodes = tree.len(), "loaded behavior tree");
    Ok(tree)
}
