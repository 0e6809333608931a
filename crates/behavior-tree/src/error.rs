//! Construction-time errors.
//!
//! Every error in this module is raised while a tree is being built. Once a
//! [`BehaviorTree`](crate::BehaviorTree) exists, evaluating it cannot fail:
//! `Status::Failure` is an ordinary outcome, not an error.

/// Errors that abort tree construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A Sequence or Selector was declared without children.
    #[error("composite `{node}` has no children")]
    EmptyComposite { node: String },

    /// A leaf refers to a callable that is not registered.
    #[error("{kind} leaf `{leaf}` (node `{node}`) is not registered")]
    UnknownLeaf {
        kind: LeafKind,
        leaf: String,
        node: String,
    },

    /// A required bound argument was not supplied.
    #[error("leaf `{leaf}` is missing argument #{index} ({what})")]
    MissingArgument {
        leaf: String,
        index: usize,
        what: &'static str,
    },

    /// A bound argument is outside the leaf's domain.
    #[error("leaf `{leaf}` argument #{index} ({what}) is invalid: {value}")]
    InvalidArgument {
        leaf: String,
        index: usize,
        what: &'static str,
        value: String,
    },

    /// A tree definition could not be parsed.
    #[error("failed to parse tree definition: {0}")]
    Parse(String),
}

/// The two leaf flavours, used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LeafKind {
    Action,
    Condition,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
