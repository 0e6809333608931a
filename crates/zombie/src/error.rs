//! Zombie crate errors.

use std::path::PathBuf;

use behavior_tree::ConfigError;

/// Errors raised while setting up a zombie.
#[derive(Debug, thiserror::Error)]
pub enum ZombieError {
    /// The behavior tree could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A tree definition file could not be read.
    #[error("failed to read tree file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No preset has the requested name.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, ZombieError>;
