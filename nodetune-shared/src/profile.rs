//! Performance profile data model.
//!
//! Mirrors the wire shape of the `PerformanceProfile` custom resource. Field
//! values are carried verbatim; CPU lists and page sizes are never parsed
//! here, that is the admission layer's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// CPU range list such as `0-3,8`, passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CpuSet(String);

impl CpuSet {
    pub fn new(cpus: impl Into<String>) -> Self {
        Self(cpus.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CpuSet {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Huge page size such as `1G` or `2M`, passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HugePageSize(String);

impl HugePageSize {
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HugePageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HugePageSize {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identity of a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub name: String,
}

/// A performance profile as handed over by the reconciler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub metadata: ProfileMeta,

    pub spec: PerformanceProfileSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfileSpec {
    pub cpu: CpuSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub huge_pages: Option<HugePages>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_time_kernel: Option<RealTimeKernel>,

    /// Labels for the generated configuration object. When unset a default
    /// role label is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_config_label: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSpec {
    /// CPUs removed from the general scheduler via `isolcpus=`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated: Option<CpuSet>,

    /// CPUs left for housekeeping; handed to the pre-boot tuning unit
    pub non_isolated: CpuSet,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HugePages {
    #[serde(
        rename = "defaultHugepagesSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_huge_pages_size: Option<HugePageSize>,

    /// Page reservations, in kernel argument order
    #[serde(default)]
    pub pages: Vec<HugePage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HugePage {
    pub size: HugePageSize,
    pub count: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RealTimeKernel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PerformanceProfile {
    /// Create a profile with only the required fields set.
    pub fn new(name: impl Into<String>, non_isolated: impl Into<CpuSet>) -> Self {
        Self {
            api_version: None,
            kind: None,
            metadata: ProfileMeta { name: name.into() },
            spec: PerformanceProfileSpec {
                cpu: CpuSpec {
                    isolated: None,
                    non_isolated: non_isolated.into(),
                },
                huge_pages: None,
                real_time_kernel: None,
                machine_config_label: None,
            },
        }
    }

    pub fn with_isolated(mut self, isolated: impl Into<CpuSet>) -> Self {
        self.spec.cpu.isolated = Some(isolated.into());
        self
    }

    pub fn with_huge_pages(mut self, huge_pages: HugePages) -> Self {
        self.spec.huge_pages = Some(huge_pages);
        self
    }

    /// Set the real-time kernel flag. `None` keeps the object but leaves
    /// `enabled` unset.
    pub fn with_real_time_kernel(mut self, enabled: Option<bool>) -> Self {
        self.spec.real_time_kernel = Some(RealTimeKernel { enabled });
        self
    }

    pub fn with_machine_config_label(mut self, labels: BTreeMap<String, String>) -> Self {
        self.spec.machine_config_label = Some(labels);
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// True only when the real-time kernel flag is present and set.
    pub fn real_time_kernel_enabled(&self) -> bool {
        self.spec
            .real_time_kernel
            .as_ref()
            .and_then(|rt| rt.enabled)
            .unwrap_or(false)
    }
}

impl HugePage {
    pub fn new(size: impl Into<HugePageSize>, count: i32) -> Self {
        Self {
            size: size.into(),
            count,
        }
    }
}
