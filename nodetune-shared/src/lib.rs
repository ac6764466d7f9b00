//! Nodetune Core - Shared types for profile rendering
//!
//! This crate contains the performance profile data model, the constant
//! tables used when rendering node configuration, and the error type
//! shared by the library and the command-line front end.

pub mod constants;
pub mod errors;
pub mod profile;

pub use errors::{NodetuneError, NodetuneResult};
pub use profile::{
    CpuSet, CpuSpec, HugePage, HugePageSize, HugePages, PerformanceProfile,
    PerformanceProfileSpec, ProfileMeta, RealTimeKernel,
};
