//! Error types for nodetune.
//!
//! Errors are split by where they originate:
//! - asset errors: a tuning script could not be read from the asset directory
//! - serialization errors: a unit file or document could not be rendered
//! - profile errors: a profile document handed in by a caller could not be parsed

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across nodetune crates.
pub type NodetuneResult<T> = Result<T, NodetuneError>;

#[derive(Debug, Error)]
pub enum NodetuneError {
    /// A script asset is missing or unreadable.
    #[error("script asset {name} at {}: {source}", .path.display())]
    Asset {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering a unit file or document failed.
    #[error("serialization: {0}")]
    Serialization(String),

    /// A profile document could not be parsed.
    #[error("profile: {0}")]
    Profile(String),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl NodetuneError {
    /// Create an asset error.
    pub fn asset(name: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Asset {
            name: name.into(),
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for NodetuneError {
    fn from(err: serde_json::Error) -> Self {
        NodetuneError::Serialization(err.to_string())
    }
}
