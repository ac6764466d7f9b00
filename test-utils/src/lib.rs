//! Shared fixtures for nodetune tests.
//!
//! Only depends on `nodetune-shared`, so the library's own unit tests can use
//! it without pulling in a second copy of the library.

use nodetune_shared::constants::scripts as const_scripts;
use nodetune_shared::{HugePage, HugePageSize, HugePages, PerformanceProfile};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default pre-boot tuning script body used by fixtures
pub const PRE_BOOT_TUNING_SCRIPT: &[u8] =
    b"#!/usr/bin/env bash\nset -euo pipefail\necho \"housekeeping cpus: ${NON_ISOLATED_CPUS}\"\n";

/// Default reboot script body used by fixtures
pub const REBOOT_SCRIPT: &[u8] = b"#!/usr/bin/env bash\nset -euo pipefail\necho reboot\n";

/// Temporary asset directory laid out as `<root>/scripts/<name>.sh`.
///
/// Removed when dropped.
pub struct AssetDir {
    dir: TempDir,
}

impl AssetDir {
    /// Asset directory holding both catalog scripts.
    pub fn new() -> Self {
        Self::empty()
            .with_script(const_scripts::PRE_BOOT_TUNING, PRE_BOOT_TUNING_SCRIPT)
            .with_script(const_scripts::REBOOT, REBOOT_SCRIPT)
    }

    /// Asset directory with an empty `scripts/` subdirectory.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp asset dir");
        std::fs::create_dir_all(dir.path().join(const_scripts::ASSET_SUBDIR))
            .expect("Failed to create scripts dir");
        Self { dir }
    }

    /// Write (or overwrite) a script.
    pub fn with_script(self, name: &str, content: &[u8]) -> Self {
        std::fs::write(self.script_path(name), content).expect("Failed to write script");
        self
    }

    /// Remove a script.
    pub fn without_script(self, name: &str) -> Self {
        std::fs::remove_file(self.script_path(name)).expect("Failed to remove script");
        self
    }

    pub fn script_path(&self, name: &str) -> PathBuf {
        self.dir
            .path()
            .join(const_scripts::ASSET_SUBDIR)
            .join(format!("{}.{}", name, const_scripts::EXTENSION))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for AssetDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile with isolated `2-3`, housekeeping `0-1`, four 1G pages and the
/// real-time kernel enabled.
pub fn realtime_profile() -> PerformanceProfile {
    PerformanceProfile::new("example", "0-1")
        .with_isolated("2-3")
        .with_huge_pages(HugePages {
            default_huge_pages_size: None,
            pages: vec![HugePage::new("1G", 4)],
        })
        .with_real_time_kernel(Some(true))
}

/// Profile with every optional field left unset.
pub fn minimal_profile() -> PerformanceProfile {
    PerformanceProfile::new("minimal", "0")
}

/// Profile using default page size and two page entries.
pub fn mixed_pages_profile() -> PerformanceProfile {
    PerformanceProfile::new("mixed", "0,4")
        .with_isolated("1-3,5-7")
        .with_huge_pages(HugePages {
            default_huge_pages_size: Some(HugePageSize::new("1G")),
            pages: vec![HugePage::new("1G", 16), HugePage::new("2M", 1024)],
        })
}

/// Write a profile document to `dir` as YAML.
pub fn write_profile_yaml(dir: &Path, file_name: &str, yaml: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, yaml).expect("Failed to write profile");
    path
}
