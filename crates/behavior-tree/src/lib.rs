//! Lightweight behavior tree library for frame-driven agents.
//!
//! This library provides a small, deterministic behavior tree interpreter
//! designed for game entities that are updated once per frame.
//!
//! - **Running state**: Actions may span several frames
//! - **Resumable composites**: Sequences and selectors remember which child
//!   was running and continue there on the next tick
//! - **Arena storage**: Nodes live in one table and refer to children by index
//! - **Explicit context**: Leaves receive the agent context on every tick
//!   instead of capturing the agent
//!
//! # Architecture
//!
//! - [`Behavior`] / [`Predicate`]: Traits for action and condition leaves
//! - [`Status`]: Success, Failure or Running
//! - [`Node`]: Blueprint passed to construction ([`builder`] has shorthands)
//! - [`BehaviorTree`]: Owns the arena and exposes [`BehaviorTree::run`]
//! - [`NodeDef`] / [`LeafRegistry`]: Trees described as RON data

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod def;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Predicate};
pub use composite::Policy;
pub use def::{Args, LeafRegistry, NodeDef};
pub use error::{ConfigError, LeafKind};
pub use node::{Node, NodeId, NodeKind};
pub use status::Status;
pub use tree::BehaviorTree;
