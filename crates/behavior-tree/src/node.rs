//! Node blueprints.
//!
//! A [`Node`] is the owned, nested description of a tree handed to
//! [`BehaviorTree::new`](crate::BehaviorTree::new). Blueprints carry no
//! evaluation state; the tree flattens them into an arena on construction.

use std::fmt;

use crate::{Behavior, Predicate};

/// One node of a tree under construction.
///
/// The `name` of every variant is a human-readable label used in logs and
/// lookups. It has no effect on evaluation.
pub enum Node<C> {
    /// Runs an action leaf.
    Action {
        name: String,
        behavior: Box<dyn Behavior<C>>,
    },
    /// Checks a condition leaf.
    Condition {
        name: String,
        predicate: Box<dyn Predicate<C>>,
    },
    /// Ticks children left to right until one fails (AND).
    Sequence { name: String, children: Vec<Node<C>> },
    /// Ticks children left to right until one succeeds (OR).
    Selector { name: String, children: Vec<Node<C>> },
}

impl<C> Node<C> {
    /// Creates an action leaf.
    pub fn action(name: impl Into<String>, behavior: impl Behavior<C> + 'static) -> Self {
        Node::Action {
            name: name.into(),
            behavior: Box::new(behavior),
        }
    }

    /// Creates a condition leaf.
    pub fn condition(name: impl Into<String>, predicate: impl Predicate<C> + 'static) -> Self {
        Node::Condition {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Creates a sequence. Emptiness is rejected when the tree is built.
    pub fn sequence(name: impl Into<String>, children: Vec<Node<C>>) -> Self {
        Node::Sequence {
            name: name.into(),
            children,
        }
    }

    /// Creates a selector. Emptiness is rejected when the tree is built.
    pub fn selector(name: impl Into<String>, children: Vec<Node<C>>) -> Self {
        Node::Selector {
            name: name.into(),
            children,
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Action { name, .. } => f.debug_tuple("Action").field(name).finish(),
            Node::Condition { name, .. } => f.debug_tuple("Condition").field(name).finish(),
            Node::Sequence { name, children } => f
                .debug_struct("Sequence")
                .field("name", name)
                .field("children", children)
                .finish(),
            Node::Selector { name, children } => f
                .debug_struct("Selector")
                .field("name", name)
                .field("children", children)
                .finish(),
        }
    }
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Action,
    Condition,
    Sequence,
    Selector,
}

/// Index of a node inside a [`BehaviorTree`](crate::BehaviorTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
