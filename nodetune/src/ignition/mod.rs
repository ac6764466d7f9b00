//! Ignition document assembly.
//!
//! Embeds the tuning scripts as base64 data URIs and installs the two oneshot
//! units that run them. The whole document is built or nothing is: a missing
//! script or a unit that fails to render aborts the build.

mod types;

pub use types::{File, FileContents, Ignition, IgnitionConfig, Storage, Systemd, Unit};

use crate::assets;
use crate::systemd::{
    pre_boot_tuning_unit_options, reboot_unit_options, script_install_path, service_name,
    to_unit_string,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use nodetune_shared::constants::ignition as const_ignition;
use nodetune_shared::constants::scripts as const_scripts;
use nodetune_shared::{NodetuneError, NodetuneResult, PerformanceProfile};
use std::path::Path;

/// Build the ignition document for a profile.
///
/// Produces, in order:
/// - one file per catalog script at `/usr/local/bin/<name>.sh`, mode `0700`
/// - `pre-boot-tuning.service` and `reboot.service`, both enabled
pub fn build_ignition_config(
    assets_dir: &Path,
    profile: &PerformanceProfile,
) -> NodetuneResult<IgnitionConfig> {
    let mut config = IgnitionConfig::new(const_ignition::VERSION);

    for script in assets::load_all(assets_dir)? {
        config.storage.files.push(File {
            filesystem: const_ignition::FILESYSTEM.to_string(),
            path: script_install_path(script.name),
            contents: FileContents {
                source: data_uri(&script.content),
            },
            mode: Some(const_ignition::SCRIPT_MODE),
        });
    }

    let pre_boot_tuning_service =
        to_unit_string(&pre_boot_tuning_unit_options(&profile.spec.cpu.non_isolated))?;
    let reboot_service = to_unit_string(&reboot_unit_options())?;

    config.systemd.units = vec![
        Unit {
            name: service_name(const_scripts::PRE_BOOT_TUNING),
            enabled: Some(true),
            contents: Some(pre_boot_tuning_service),
        },
        Unit {
            name: service_name(const_scripts::REBOOT),
            enabled: Some(true),
            contents: Some(reboot_service),
        },
    ];

    tracing::debug!(
        profile = profile.name(),
        files = config.storage.files.len(),
        units = config.systemd.units.len(),
        "Assembled ignition config"
    );

    Ok(config)
}

/// Encode content as a base64 data URI.
pub fn data_uri(content: &[u8]) -> String {
    format!(
        "{},{}",
        const_ignition::CONTENT_SOURCE,
        STANDARD.encode(content)
    )
}

/// Decode a data URI produced by [`data_uri`].
pub fn decode_data_uri(source: &str) -> NodetuneResult<Vec<u8>> {
    let payload = source
        .strip_prefix(const_ignition::CONTENT_SOURCE)
        .and_then(|rest| rest.strip_prefix(','))
        .ok_or_else(|| {
            NodetuneError::Serialization(format!("Unsupported content source: {}", source))
        })?;

    STANDARD
        .decode(payload)
        .map_err(|e| NodetuneError::Serialization(format!("Invalid base64 payload: {}", e)))
}
