//! Machine config object types.

use crate::ignition::IgnitionConfig;
use nodetune_shared::constants::kernel as const_kernel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kernel flavor the node boots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelType {
    #[default]
    Default,
    Realtime,
}

impl KernelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelType::Default => const_kernel::TYPE_DEFAULT,
            KernelType::Realtime => const_kernel::TYPE_REALTIME,
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    /// Ordered so serialized output is stable
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfigSpec {
    pub config: IgnitionConfig,
    #[serde(default)]
    pub kernel_arguments: Vec<String>,
    #[serde(default)]
    pub kernel_type: KernelType,
}

/// The rendered artifact handed to the node configuration agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: MachineConfigSpec,
}
