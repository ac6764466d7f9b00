//! Option lists for the generated units.

use super::{UnitOption, environment, script_install_path, service_name};
use nodetune_shared::CpuSet;
use nodetune_shared::constants::scripts as const_scripts;
use nodetune_shared::constants::systemd::*;

/// Options for `pre-boot-tuning.service`.
///
/// Runs before both the kubelet and the reboot unit, with the housekeeping
/// CPUs exported as `NON_ISOLATED_CPUS`.
pub fn pre_boot_tuning_unit_options(non_isolated_cpus: &CpuSet) -> Vec<UnitOption> {
    vec![
        // [Unit]
        UnitOption::new(SECTION_UNIT, DESCRIPTION, PRE_BOOT_TUNING_DESCRIPTION),
        UnitOption::new(SECTION_UNIT, BEFORE, SERVICE_KUBELET),
        UnitOption::new(
            SECTION_UNIT,
            BEFORE,
            service_name(const_scripts::REBOOT),
        ),
        // [Service]
        UnitOption::new(
            SECTION_SERVICE,
            ENVIRONMENT,
            environment(ENV_NON_ISOLATED_CPUS, non_isolated_cpus.as_str()),
        ),
        UnitOption::new(SECTION_SERVICE, TYPE, SERVICE_TYPE_ONESHOT),
        UnitOption::new(SECTION_SERVICE, REMAIN_AFTER_EXIT, TRUE),
        UnitOption::new(
            SECTION_SERVICE,
            EXEC_START,
            script_install_path(const_scripts::PRE_BOOT_TUNING),
        ),
        // [Install]
        UnitOption::new(SECTION_INSTALL, WANTED_BY, TARGET_MULTI_USER),
    ]
}

/// Options for `reboot.service`.
///
/// Waits for the network, then reboots into the tuned kernel before the
/// kubelet gets a chance to admit workloads.
pub fn reboot_unit_options() -> Vec<UnitOption> {
    vec![
        // [Unit]
        UnitOption::new(SECTION_UNIT, DESCRIPTION, REBOOT_DESCRIPTION),
        UnitOption::new(SECTION_UNIT, WANTS, TARGET_NETWORK_ONLINE),
        UnitOption::new(SECTION_UNIT, AFTER, TARGET_NETWORK_ONLINE),
        UnitOption::new(SECTION_UNIT, BEFORE, SERVICE_KUBELET),
        // [Service]
        UnitOption::new(SECTION_SERVICE, TYPE, SERVICE_TYPE_ONESHOT),
        UnitOption::new(SECTION_SERVICE, REMAIN_AFTER_EXIT, TRUE),
        UnitOption::new(
            SECTION_SERVICE,
            EXEC_START,
            script_install_path(const_scripts::REBOOT),
        ),
        // [Install]
        UnitOption::new(SECTION_INSTALL, WANTED_BY, TARGET_MULTI_USER),
    ]
}
