//! Zombie agent driven by a behavior tree.
//!
//! This crate binds the generic [`behavior_tree`] engine to one kind of
//! agent: a zombie that wanders the field, and chases or runs away from the
//! boy depending on who has collected more balls.
//!
//! # Core Components
//!
//! - [`Zombie`]: The entity; call [`Zombie::update`] once per frame
//! - [`AgentContext`]: What the leaves see (body, boy snapshot, dt, rng)
//! - [`nodes`]: Action and condition leaves
//! - [`subtrees`] / [`presets`]: Trees composed from those leaves
//! - [`registry`]: The same leaves, addressable by name from RON files

pub mod body;
pub mod boy;
pub mod context;
pub mod error;
pub mod geometry;
pub mod nodes;
pub mod presets;
pub mod registry;
pub mod subtrees;
pub mod zombie;

pub use body::{AnimState, ZombieBody};
pub use boy::Boy;
pub use context::AgentContext;
pub use error::ZombieError;
pub use geometry::Point;
pub use registry::{default_tree, load_def, load_tree, registry};
pub use zombie::Zombie;
