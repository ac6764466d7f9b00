#![allow(dead_code)]

use assert_cmd::Command;
use nodetune_test_utils::{AssetDir, write_profile_yaml};
use std::path::PathBuf;
use std::time::Duration;

pub const REALTIME_PROFILE: &str = r#"apiVersion: performance.openshift.io/v1alpha1
kind: PerformanceProfile
metadata:
  name: example
spec:
  cpu:
    isolated: "2-3"
    nonIsolated: "0-1"
  hugePages:
    pages:
      - size: 1G
        count: 4
  realTimeKernel:
    enabled: true
"#;

pub const MINIMAL_PROFILE: &str = r#"metadata:
  name: minimal
spec:
  cpu:
    nonIsolated: "0"
"#;

pub struct TestContext {
    pub cmd: Command,
    pub assets: AssetDir,
    pub work_dir: tempfile::TempDir,
}

impl TestContext {
    /// Fresh command sharing this context's assets
    pub fn new_cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nodetune"));
        cmd.timeout(Duration::from_secs(30));
        cmd.env_remove("RUST_LOG");
        cmd.env("NODETUNE_ASSETS_DIR", self.assets.path());
        cmd
    }

    /// Write a profile document into the work dir
    pub fn profile(&self, file_name: &str, contents: &str) -> PathBuf {
        write_profile_yaml(self.work_dir.path(), file_name, contents)
    }
}

pub fn nodetune() -> TestContext {
    let assets = AssetDir::new();
    let work_dir = tempfile::tempdir().expect("Failed to create work dir");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nodetune"));
    cmd.timeout(Duration::from_secs(30));
    cmd.env_remove("RUST_LOG");
    cmd.env("NODETUNE_ASSETS_DIR", assets.path());

    TestContext {
        cmd,
        assets,
        work_dir,
    }
}
