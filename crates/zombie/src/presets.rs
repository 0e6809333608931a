//! Complete behavior trees for zombie archetypes.
//!
//! Presets are built by composing [`subtrees`]:
//!
//! ```text
//! zombie()
//!   └─ Selector "wander or react"
//!       ├─ subtrees::react_to_boy()
//!       │   ├─ Condition "boy nearby"
//!       │   └─ subtrees::chase_or_flee()
//!       │       ├─ Sequence [zombie stronger, move to boy]
//!       │       └─ Sequence [run away]
//!       └─ subtrees::wander()
//! ```

use behavior_tree::Node;
use behavior_tree::builder::selector;

use crate::{AgentContext, subtrees};

/// Default zombie: reacts to a nearby boy, wanders otherwise.
///
/// A zombie with at least as many balls as the boy chases him; a weaker one
/// runs away until it is out of detection range.
pub fn zombie() -> Node<AgentContext> {
    selector(
        "wander or react",
        vec![subtrees::react_to_boy(), subtrees::wander()],
    )
}

/// Always chases a nearby boy regardless of strength, wanders otherwise.
pub fn chaser() -> Node<AgentContext> {
    selector(
        "chase or wander",
        vec![subtrees::chase_boy(), subtrees::wander()],
    )
}

/// Walks the patrol route forever and ignores the boy.
pub fn patroller() -> Node<AgentContext> {
    subtrees::patrol()
}

/// Looks a preset up by name.
pub fn by_name(name: &str) -> Option<Node<AgentContext>> {
    match name {
        "zombie" => Some(zombie()),
        "chaser" => Some(chaser()),
        "patroller" => Some(patroller()),
        _ => None,
    }
}
