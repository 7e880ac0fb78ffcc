//! Error types for the munge pipeline.
//!
//! Only conditions that stop a run live here. A rejected line, an
//! unresolved categorical value and a duplicate callsign are ordinary
//! outcomes and are counted in [`RunStats`](crate::RunStats) instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolve::Category;

/// Fatal errors raised while configuring or running the pipeline.
#[derive(Error, Debug)]
pub enum MungeError {
    /// The input path was given but could not be opened.
    #[error("unable to open input '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output artifact could not be created.
    #[error("unable to create '{}': {source}", path.display())]
    CreateArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read or write failure on an already open stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration parsed but is not usable.
    #[error("invalid config: {0}")]
    Config(String),

    /// Two keywords of one vocabulary hash alike but name different entries.
    #[error("{category} keywords '{first}' and '{second}' collide")]
    HashCollision {
        category: Category,
        first: String,
        second: String,
    },
}

impl MungeError {
    /// Process exit code for this error: 2 for an unopenable input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            MungeError::OpenInput { .. } => 2,
            _ => 1,
        }
    }
}

/// Convenience alias for results carrying a [`MungeError`].
pub type Result<T> = std::result::Result<T, MungeError>;
