//! Zombie-specific behavior tree nodes.
//!
//! This module contains concrete implementations of behavior tree leaves
//! that operate on an [`AgentContext`](crate::AgentContext). Nodes are divided into:
//!
//! - `conditions`: Nodes that check the context (pass or fail, never Running)
//! - `actions`: Nodes that move the zombie or pick its next target

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
