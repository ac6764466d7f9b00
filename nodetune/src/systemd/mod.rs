//! Systemd units shipped with the tuning scripts.
//!
//! Units are modeled as an ordered list of [`UnitOption`] triples rather than
//! a map: the same key may appear several times in a section (two `Before=`
//! lines) and the rendered text must not depend on hashing order.
//!
//! Boot ordering enforced by the generated units:
//!
//! ```text
//! pre-boot-tuning.service ──Before──> reboot.service ──Before──> kubelet.service
//!          └────────────────────Before──────────────────────────────┘
//! ```

mod options;
mod unit;

pub use options::{pre_boot_tuning_unit_options, reboot_unit_options};
pub use unit::{serialize, to_unit_string};

use nodetune_shared::constants::scripts as const_scripts;
use nodetune_shared::constants::systemd as const_systemd;

/// One `key=value` line of a unit file, tagged with its section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitOption {
    pub section: String,
    pub key: String,
    pub value: String,
}

impl UnitOption {
    pub fn new(section: &str, key: &str, value: impl Into<String>) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Unit name for a script, e.g. `reboot.service`.
pub fn service_name(name: &str) -> String {
    format!("{}.{}", name, const_systemd::SERVICE_SUFFIX)
}

/// Install path of a script on the node, e.g. `/usr/local/bin/reboot.sh`.
pub fn script_install_path(name: &str) -> String {
    format!(
        "{}/{}.{}",
        const_scripts::INSTALL_DIR,
        name,
        const_scripts::EXTENSION
    )
}

/// `KEY=value` as used in an `Environment=` line.
pub fn environment(key: &str, value: &str) -> String {
    format!("{}={}", key, value)
}
