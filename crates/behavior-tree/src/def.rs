//! Data-driven tree definitions.
//!
//! A [`NodeDef`] describes a tree by naming its leaves instead of holding
//! them. A [`LeafRegistry`] resolves those names to factories supplied by the
//! agent, binding each leaf's numeric arguments once at construction time.
//!
//! Definitions are stored as RON:
//!
//! ```text
//! Sequence(
//!     name: "wander",
//!     children: [
//!         Action(name: "pick spot", leaf: "set_random_target"),
//!         Action(name: "walk", leaf: "move_to_target", args: [0.5]),
//!     ],
//! )
//! ```

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LeafKind, Result};
use crate::{Behavior, BehaviorTree, Node, Predicate};

/// Serializable description of a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeDef {
    Action {
        name: String,
        leaf: String,
        #[serde(default)]
        args: Vec<f32>,
    },
    Condition {
        name: String,
        leaf: String,
        #[serde(default)]
        args: Vec<f32>,
    },
    Sequence {
        name: String,
        children: Vec<NodeDef>,
    },
    Selector {
        name: String,
        children: Vec<NodeDef>,
    },
}

impl NodeDef {
    /// Parses a definition from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Renders the definition as pretty RON.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Returns the node's label.
    pub fn name(&self) -> &str {
        match self {
            NodeDef::Action { name, .. }
            | NodeDef::Condition { name, .. }
            | NodeDef::Sequence { name, .. }
            | NodeDef::Selector { name, .. } => name,
        }
    }
}

/// Arguments bound to a leaf at construction time.
///
/// Factories read the arguments they need; [`LeafRegistry::build`] rejects
/// any argument past the last one read.
#[derive(Debug)]
pub struct Args<'a> {
    leaf: &'a str,
    values: &'a [f32],
    read: Cell<usize>,
}

impl<'a> Args<'a> {
    /// Wraps the `values` bound to the leaf registered as `leaf`.
    pub fn new(leaf: &'a str, values: &'a [f32]) -> Self {
        Self {
            leaf,
            values,
            read: Cell::new(0),
        }
    }

    /// Returns a required argument.
    pub fn get(&self, index: usize, what: &'static str) -> Result<f32> {
        self.mark_read(index);
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| ConfigError::MissingArgument {
                leaf: self.leaf.to_string(),
                index,
                what,
            })
    }

    /// Validates that an argument is finite and not negative (distances).
    pub fn distance(&self, index: usize, what: &'static str, default: Option<f32>) -> Result<f32> {
        self.checked(index, what, default, |v| v >= 0.0)
    }

    /// Validates that an argument is finite and strictly positive.
    ///
    /// Use this for radii compared with a strict `<`: a zero radius could
    /// never be reached.
    pub fn radius(&self, index: usize, what: &'static str, default: Option<f32>) -> Result<f32> {
        self.checked(index, what, default, |v| v > 0.0)
    }

    fn checked(
        &self,
        index: usize,
        what: &'static str,
        default: Option<f32>,
        accept: impl Fn(f32) -> bool,
    ) -> Result<f32> {
        let value = match (self.values.get(index), default) {
            (Some(value), _) => *value,
            (None, Some(default)) => default,
            (None, None) => return self.get(index, what),
        };
        self.mark_read(index);

        if !value.is_finite() || !accept(value) {
            return Err(self.invalid(index, what, value));
        }
        Ok(value)
    }

    fn mark_read(&self, index: usize) {
        self.read.set(self.read.get().max(index + 1));
    }

    /// Fails on the first argument no factory call asked for.
    fn finish(&self) -> Result<()> {
        match self.values.get(self.read.get()) {
            Some(&value) => Err(self.invalid(self.read.get(), "unexpected argument", value)),
            None => Ok(()),
        }
    }

    fn invalid(&self, index: usize, what: &'static str, value: f32) -> ConfigError {
        ConfigError::InvalidArgument {
            leaf: self.leaf.to_string(),
            index,
            what,
            value: value.to_string(),
        }
    }
}

type ActionFactory<C> = Box<dyn Fn(&Args<'_>) -> Result<Box<dyn Behavior<C>>> + Send + Sync>;
type ConditionFactory<C> = Box<dyn Fn(&Args<'_>) -> Result<Box<dyn Predicate<C>>> + Send + Sync>;

/// Maps leaf keys to factories for a context type `C`.
pub struct LeafRegistry<C> {
    actions: HashMap<String, ActionFactory<C>>,
    conditions: HashMap<String, ConditionFactory<C>>,
}

impl<C: 'static> LeafRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            conditions: HashMap::new(),
        }
    }

    /// Registers an action factory under `key`, replacing any previous one.
    pub fn register_action<B, F>(&mut self, key: impl Into<String>, factory: F) -> &mut Self
    where
        B: Behavior<C> + 'static,
        F: Fn(&Args<'_>) -> Result<B> + Send + Sync + 'static,
    {
        self.actions.insert(
            key.into(),
            Box::new(move |args: &Args<'_>| {
                factory(args).map(|b| Box::new(b) as Box<dyn Behavior<C>>)
            }),
        );
        self
    }

    /// Registers a condition factory under `key`, replacing any previous one.
    pub fn register_condition<P, F>(&mut self, key: impl Into<String>, factory: F) -> &mut Self
    where
        P: Predicate<C> + 'static,
        F: Fn(&Args<'_>) -> Result<P> + Send + Sync + 'static,
    {
        self.conditions.insert(
            key.into(),
            Box::new(move |args: &Args<'_>| {
                factory(args).map(|p| Box::new(p) as Box<dyn Predicate<C>>)
            }),
        );
        self
    }

    /// Returns `true` if an action factory is registered under `key`.
    pub fn has_action(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    /// Returns `true` if a condition factory is registered under `key`.
    pub fn has_condition(&self, key: &str) -> bool {
        self.conditions.contains_key(key)
    }

    /// Resolves a definition into a blueprint.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownLeaf`] if a leaf key is not registered
    /// - [`ConfigError::InvalidArgument`] if a leaf is given more arguments
    ///   than its factory reads
    /// - any error raised by a leaf factory while binding its arguments
    pub fn build(&self, def: &NodeDef) -> Result<Node<C>> {
        match def {
            NodeDef::Action { name, leaf, args } => {
                let factory = self
                    .actions
                    .get(leaf)
                    .ok_or_else(|| unknown(LeafKind::Action, leaf, name))?;
                let args = Args::new(leaf, args);
                let behavior = factory(&args)?;
                args.finish()?;
                Ok(Node::Action {
                    name: name.clone(),
                    behavior,
                })
            }
            NodeDef::Condition { name, leaf, args } => {
                let factory = self
                    .conditions
                    .get(leaf)
                    .ok_or_else(|| unknown(LeafKind::Condition, leaf, name))?;
                let args = Args::new(leaf, args);
                let predicate = factory(&args)?;
                args.finish()?;
                Ok(Node::Condition {
                    name: name.clone(),
                    predicate,
                })
            }
            NodeDef::Sequence { name, children } => {
                Ok(Node::sequence(name.clone(), self.build_all(children)?))
            }
            NodeDef::Selector { name, children } => {
                Ok(Node::selector(name.clone(), self.build_all(children)?))
            }
        }
    }

    /// Resolves a definition and builds the tree.
    pub fn build_tree(&self, def: &NodeDef) -> Result<BehaviorTree<C>> {
        let tree = BehaviorTree::new(self.build(def)?)?;
        tracing::debug!(root = def.name(), nodes = tree.len(), "built tree from definition");
        Ok(tree)
    }

    fn build_all(&self, defs: &[NodeDef]) -> Result<Vec<Node<C>>> {
        defs.iter().map(|d| self.build(d)).collect()
    }
}

impl<C: 'static> Default for LeafRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for LeafRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<_> = self.actions.keys().collect();
        let mut conditions: Vec<_> = self.conditions.keys().collect();
        actions.sort();
        conditions.sort();
        f.debug_struct("LeafRegistry")
            .field("actions", &actions)
            .field("conditions", &conditions)
            .finish()
    }
}

fn unknown(kind: LeafKind, leaf: &str, node: &str) -> ConfigError {
    ConfigError::UnknownLeaf {
        kind,
        leaf: leaf.to_string(),
        node: node.to_string(),
    }
}
