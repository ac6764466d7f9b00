//! Ignition 2.2 document types.
//!
//! Only the parts of the schema nodetune writes are modeled. Field names follow
//! the ignition wire format.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IgnitionConfig {
    pub ignition: Ignition,
    pub storage: Storage,
    pub systemd: Systemd,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ignition {
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub files: Vec<File>,
}

/// A file written to the node's filesystem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub filesystem: String,
    pub path: String,
    pub contents: FileContents,
    /// Numeric permission bits (e.g. `448` for `0o700`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileContents {
    /// Data URI holding the file content
    pub source: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Systemd {
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// A systemd unit installed on the node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl IgnitionConfig {
    /// Empty document with the given spec version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            ignition: Ignition {
                version: version.into(),
            },
            storage: Storage::default(),
            systemd: Systemd::default(),
        }
    }

    pub fn file(&self, path: &str) -> Option<&File> {
        self.storage.files.iter().find(|f| f.path == path)
    }

    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.systemd.units.iter().find(|u| u.name == name)
    }
}
