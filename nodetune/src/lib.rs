//! Nodetune - render performance profiles into node configuration
//!
//! A [`PerformanceProfile`] describes how a class of nodes should be tuned:
//! which CPUs are isolated, how huge pages are laid out and whether the
//! real-time kernel is used. [`machineconfig::new`] turns a profile plus an
//! asset directory into a [`MachineConfig`] that a node configuration agent
//! applies at boot:
//!
//! - kernel arguments (fixed tuning base plus CPU isolation and huge pages)
//! - kernel type (`default` or `realtime`)
//! - an ignition document embedding the tuning scripts and two oneshot
//!   systemd units ordered before the kubelet
//!
//! Rendering is deterministic: the same profile and the same script bytes
//! always produce the same document, so a reconciler can diff it safely.
//!
//! # Example
//!
//! ```no_run
//! use nodetune::PerformanceProfile;
//! use std::path::Path;
//!
//! let profile = PerformanceProfile::new("example", "0-1").with_isolated("2-3");
//! let mc = nodetune::machineconfig::new(Path::new("assets"), &profile)?;
//! assert_eq!(mc.metadata.name, "performance-example");
//! # Ok::<(), nodetune::NodetuneError>(())
//! ```

pub mod assets;
pub mod components;
pub mod ignition;
pub mod kernel;
pub mod machineconfig;
pub mod systemd;

pub use ignition::IgnitionConfig;
pub use machineconfig::{KernelType, MachineConfig};
pub use nodetune_shared::{
    CpuSet, HugePage, HugePageSize, HugePages, NodetuneError, NodetuneResult, PerformanceProfile,
    constants,
};
pub use systemd::UnitOption;
