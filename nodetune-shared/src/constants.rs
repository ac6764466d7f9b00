//! Constant tables used when rendering node configuration
//!
//! Everything that ends up in a rendered artifact verbatim lives here, so two
//! renders of the same profile always agree byte for byte.

/// Kernel command-line constants
pub mod kernel {
    /// Tuning arguments present on every performance node, in emitted order.
    pub const BASE_ARGS: &[&str] = &[
        "nohz=on",
        "nosoftlockup",
        "nmi_watchdog=0",
        "audit=0",
        "mce=off",
        "irqaffinity=0",
        "skew_tick=1",
        "processor.max_cstate=1",
        "idle=poll",
        "intel_pstate=disable",
        "intel_idle.max_cstate=0",
        "intel_iommu=on",
        "iommu=pt",
    ];

    pub const ISOLCPUS: &str = "isolcpus";
    pub const DEFAULT_HUGEPAGE_SIZE: &str = "default_hugepagesz";
    pub const HUGEPAGE_SIZE: &str = "hugepagesz";
    pub const HUGEPAGES: &str = "hugepages";

    /// Kernel type value for the real-time kernel
    pub const TYPE_REALTIME: &str = "realtime";

    /// Kernel type value for the stock kernel
    pub const TYPE_DEFAULT: &str = "default";
}

/// Script assets shipped to the node
pub mod scripts {
    /// Pre-boot tuning script name
    pub const PRE_BOOT_TUNING: &str = "pre-boot-tuning";

    /// Reboot script name
    pub const REBOOT: &str = "reboot";

    /// Every script embedded into the ignition document, in emitted order
    pub const ALL: &[&str] = &[PRE_BOOT_TUNING, REBOOT];

    /// Subdirectory of the asset directory holding the scripts
    pub const ASSET_SUBDIR: &str = "scripts";

    /// Script file extension
    pub const EXTENSION: &str = "sh";

    /// Install location of the scripts on the node
    pub const INSTALL_DIR: &str = "/usr/local/bin";
}

/// Ignition document constants
pub mod ignition {
    /// Ignition spec version understood by the node configuration agent
    pub const VERSION: &str = "2.2.0";

    /// Filesystem id files are written to
    pub const FILESYSTEM: &str = "root";

    /// Data-URI prefix for embedded file content
    pub const CONTENT_SOURCE: &str = "data:text/plain;charset=utf-8;base64";

    /// Mode of installed scripts (rwx for owner only)
    pub const SCRIPT_MODE: u32 = 0o700;
}

/// Systemd unit section and key names
pub mod systemd {
    pub const SECTION_UNIT: &str = "Unit";
    pub const SECTION_SERVICE: &str = "Service";
    pub const SECTION_INSTALL: &str = "Install";

    pub const DESCRIPTION: &str = "Description";
    pub const WANTS: &str = "Wants";
    pub const AFTER: &str = "After";
    pub const BEFORE: &str = "Before";
    pub const ENVIRONMENT: &str = "Environment";
    pub const TYPE: &str = "Type";
    pub const REMAIN_AFTER_EXIT: &str = "RemainAfterExit";
    pub const EXEC_START: &str = "ExecStart";
    pub const WANTED_BY: &str = "WantedBy";

    /// Workload scheduler; tuning must finish before it starts
    pub const SERVICE_KUBELET: &str = "kubelet.service";
    pub const SERVICE_TYPE_ONESHOT: &str = "oneshot";
    pub const TARGET_MULTI_USER: &str = "multi-user.target";
    pub const TARGET_NETWORK_ONLINE: &str = "network-online.target";
    pub const TRUE: &str = "true";

    /// Unit file suffix
    pub const SERVICE_SUFFIX: &str = "service";

    pub const PRE_BOOT_TUNING_DESCRIPTION: &str = "Preboot tuning patch";
    pub const REBOOT_DESCRIPTION: &str = "Reboot initiated by pre-boot-tuning";

    /// Environment variable carrying the non-isolated CPU set
    pub const ENV_NON_ISOLATED_CPUS: &str = "NON_ISOLATED_CPUS";
}

/// Machine configuration object metadata
pub mod machineconfig {
    pub const API_VERSION: &str = "machineconfiguration.openshift.io/v1";
    pub const KIND: &str = "MachineConfig";

    /// Prefix of every generated component name
    pub const COMPONENT_NAME_PREFIX: &str = "performance";

    /// Label key selecting the machine config pool role
    pub const ROLE_LABEL_KEY: &str = "machineconfiguration.openshift.io/role";

    /// Role used when the profile carries no explicit label
    pub const DEFAULT_ROLE: &str = "worker-performance";
}
