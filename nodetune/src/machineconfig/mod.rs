//! Machine config construction.
//!
//! [`new`] is the entry point of the crate. It reads the two tuning scripts
//! from the asset directory and does nothing else with the outside world.

mod types;

pub use types::{KernelType, MachineConfig, MachineConfigSpec, ObjectMeta};

use crate::components::{component_name, machine_config_labels};
use crate::ignition::build_ignition_config;
use crate::kernel::kernel_args;
use nodetune_shared::constants::machineconfig as const_mc;
use nodetune_shared::{NodetuneResult, PerformanceProfile};
use std::path::Path;

/// Build the machine config for a performance profile.
///
/// # Arguments
///
/// * `assets_dir` - Directory containing `scripts/pre-boot-tuning.sh` and
///   `scripts/reboot.sh`
/// * `profile` - Profile to render
///
/// # Errors
///
/// Returns the asset or serialization error that stopped the build. No
/// partial machine config is ever returned.
pub fn new(assets_dir: &Path, profile: &PerformanceProfile) -> NodetuneResult<MachineConfig> {
    let name = component_name(profile.name(), const_mc::COMPONENT_NAME_PREFIX);
    let labels = machine_config_labels(profile);

    let config = build_ignition_config(assets_dir, profile)?;
    let kernel_arguments = kernel_args(
        profile.spec.huge_pages.as_ref(),
        profile.spec.cpu.isolated.as_ref(),
    );
    let kernel_type = kernel_type(profile);

    tracing::info!(
        name = %name,
        kernel_type = %kernel_type,
        kernel_arguments = kernel_arguments.len(),
        "Built machine config"
    );

    Ok(MachineConfig {
        api_version: const_mc::API_VERSION.to_string(),
        kind: const_mc::KIND.to_string(),
        metadata: ObjectMeta { name, labels },
        spec: MachineConfigSpec {
            config,
            kernel_arguments,
            kernel_type,
        },
    })
}

/// `Realtime` only when the profile explicitly enables it.
pub fn kernel_type(profile: &PerformanceProfile) -> KernelType {
    if profile.real_time_kernel_enabled() {
        KernelType::Realtime
    } else {
        KernelType::Default
    }
}
