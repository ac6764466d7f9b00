//! Naming and labeling of generated components.

use nodetune_shared::PerformanceProfile;
use nodetune_shared::constants::machineconfig as const_mc;
use std::collections::BTreeMap;

/// Name of a component generated for a profile, e.g. `performance-example`.
pub fn component_name(profile_name: &str, prefix: &str) -> String {
    format!("{}-{}", prefix, profile_name)
}

/// Labels attached to the machine config.
///
/// The profile's own `machineConfigLabel` wins; otherwise the default
/// performance worker role is used so the config lands in that pool.
pub fn machine_config_labels(profile: &PerformanceProfile) -> BTreeMap<String, String> {
    match &profile.spec.machine_config_label {
        Some(labels) => labels.clone(),
        None => BTreeMap::from([(
            const_mc::ROLE_LABEL_KEY.to_string(),
            const_mc::DEFAULT_ROLE.to_string(),
        )]),
    }
}
