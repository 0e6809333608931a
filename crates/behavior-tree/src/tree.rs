//! Arena-backed behavior tree.
//!
//! [`BehaviorTree::new`] flattens a [`Node`] blueprint into a contiguous
//! table in pre-order. Composites refer to their children by [`NodeId`], so
//! the tree owns every node exactly once and cannot contain cycles.

use std::fmt;

use crate::composite::Composite;
use crate::error::{ConfigError, Result};
use crate::{Behavior, Node, NodeId, NodeKind, Policy, Predicate, Status};

enum Slot<C> {
    Action(Box<dyn Behavior<C>>),
    Condition(Box<dyn Predicate<C>>),
    Composite(Composite),
}

struct Entry<C> {
    name: String,
    slot: Slot<C>,
}

impl<C> Entry<C> {
    fn kind(&self) -> NodeKind {
        match &self.slot {
            Slot::Action(_) => NodeKind::Action,
            Slot::Condition(_) => NodeKind::Condition,
            Slot::Composite(c) => match c.policy() {
                Policy::Sequence => NodeKind::Sequence,
                Policy::Selector => NodeKind::Selector,
            },
        }
    }

    fn composite(&self) -> Option<&Composite> {
        match &self.slot {
            Slot::Composite(c) => Some(c),
            _ => None,
        }
    }
}

/// A behavior tree bound to one agent.
///
/// The tree is built once and never reconfigured. The only mutable state
/// retained between calls to [`run`](Self::run) is the resume cursor of each
/// composite (plus whatever state leaves keep for themselves).
pub struct BehaviorTree<C> {
    entries: Vec<Entry<C>>,
}

impl<C> BehaviorTree<C> {
    /// Builds a tree from its root blueprint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyComposite`] if any Sequence or Selector
    /// has no children.
    pub fn new(root: Node<C>) -> Result<Self> {
        let mut entries = Vec::new();
        flatten(&mut entries, root)?;
        tracing::trace!(nodes = entries.len(), "behavior tree built");
        Ok(Self { entries })
    }

    /// Ticks the root once and returns its status.
    ///
    /// Call this exactly once per agent per frame. Every call re-descends from
    /// the root; composites skip straight to the child they were running.
    pub fn run(&mut self, ctx: &mut C) -> Status {
        self.tick(self.root(), ctx)
    }

    fn tick(&mut self, id: NodeId, ctx: &mut C) -> Status {
        let index = id.index();
        let status = match &mut self.entries[index].slot {
            Slot::Action(behavior) => behavior.tick(ctx),
            Slot::Condition(predicate) => Status::from_bool(predicate.check(ctx)),
            Slot::Composite(slot) => {
                // Children never reach back to their parent, so the composite
                // can be lifted out while they are ticked.
                let mut composite = std::mem::take(slot);
                let status = composite.tick(|child| self.tick(child, ctx));
                self.entries[index].slot = Slot::Composite(composite);
                status
            }
        };

        tracing::trace!(node = %self.entries[index].name, id = %id, %status, "tick");
        status
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label of `id`, if it belongs to this tree.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.entries.get(id.index()).map(|e| e.name.as_str())
    }

    /// Kind of `id`, if it belongs to this tree.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.entries.get(id.index()).map(Entry::kind)
    }

    /// Children of `id`; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.entries
            .get(id.index())
            .and_then(Entry::composite)
            .map(Composite::children)
            .unwrap_or_default()
    }

    /// Resume cursor of a composite; `None` for leaves.
    pub fn cursor(&self, id: NodeId) -> Option<usize> {
        self.entries
            .get(id.index())
            .and_then(Entry::composite)
            .map(Composite::cursor)
    }

    /// First node (in pre-order) labelled `name`.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| NodeId(i as u32))
    }

    /// Iterates over all nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str, NodeKind)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (NodeId(i as u32), e.name.as_str(), e.kind()))
    }
}

impl<C> fmt::Debug for BehaviorTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

fn flatten<C>(entries: &mut Vec<Entry<C>>, node: Node<C>) -> Result<NodeId> {
    let id = NodeId(entries.len() as u32);
    match node {
        Node::Action { name, behavior } => entries.push(Entry {
            name,
            slot: Slot::Action(behavior),
        }),
        Node::Condition { name, predicate } => entries.push(Entry {
            name,
            slot: Slot::Condition(predicate),
        }),
        Node::Sequence { name, children } => {
            flatten_composite(entries, name, Policy::Sequence, children)?;
        }
        Node::Selector { name, children } => {
            flatten_composite(entries, name, Policy::Selector, children)?;
        }
    }
    Ok(id)
}

fn flatten_composite<C>(
    entries: &mut Vec<Entry<C>>,
    name: String,
    policy: Policy,
    children: Vec<Node<C>>,
) -> Result<()> {
    if children.is_empty() {
        return Err(ConfigError::EmptyComposite { node: name });
    }

    // Reserve the parent's slot first to keep pre-order numbering
    let index = entries.len();
    entries.push(Entry {
        name,
        slot: Slot::Composite(Composite::default()),
    });

    let ids = children
        .into_iter()
        .map(|child| flatten(entries, child))
        .collect::<Result<Vec<_>>>()?;

    entries[index].slot = Slot::Composite(Composite::new(policy, ids));
    Ok(())
}
