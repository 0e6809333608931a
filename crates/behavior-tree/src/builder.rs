//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing `Node::sequence("name", vec![...])`,
//! you can use shorter functions like `sequence("name", vec![...])`.

use crate::{Behavior, Node, Predicate};

/// Creates an action leaf.
///
/// Shorthand for `Node::action(name, behavior)`.
#[inline]
pub fn action<C>(name: impl Into<String>, behavior: impl Behavior<C> + 'static) -> Node<C> {
    Node::action(name, behavior)
}

/// Creates a condition leaf.
///
/// Shorthand for `Node::condition(name, predicate)`.
#[inline]
pub fn condition<C>(name: impl Into<String>, predicate: impl Predicate<C> + 'static) -> Node<C> {
    Node::condition(name, predicate)
}

/// Creates a sequence node.
///
/// Shorthand for `Node::sequence(name, children)`.
#[inline]
pub fn sequence<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    Node::sequence(name, children)
}

/// Creates a selector node.
///
/// Shorthand for `Node::selector(name, children)`.
#[inline]
pub fn selector<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    Node::selector(name, children)
}
