use predicates::prelude::*;
use rstest::rstest;

mod common;

#[test]
fn test_render_yaml() {
    let mut ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", common::REALTIME_PROFILE);

    ctx.cmd
        .arg("render")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: MachineConfig"))
        .stdout(predicate::str::contains("name: performance-example"))
        .stdout(predicate::str::contains("kernelType: realtime"))
        .stdout(predicate::str::contains("isolcpus=2-3"));
}

#[test]
fn test_render_json_parses() {
    let mut ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", common::REALTIME_PROFILE);

    let output = ctx
        .cmd
        .args(["render", "--format", "json", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["spec"]["kernelType"], "realtime");
    assert_eq!(value["spec"]["config"]["ignition"]["version"], "2.2.0");

    let kargs: Vec<&str> = value["spec"]["kernelArguments"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(
        &kargs[kargs.len() - 3..],
        &["isolcpus=2-3", "hugepagesz=1G", "hugepages=4"]
    );
}

#[rstest]
#[case("yaml")]
#[case("json")]
fn test_render_is_stable(#[case] format: &str) {
    let mut ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", common::MINIMAL_PROFILE);

    let first = ctx
        .cmd
        .args(["render", "--format", format, "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    let second = ctx
        .new_cmd()
        .args(["render", "--format", format, "--profile"])
        .arg(&profile)
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_render_assets_dir_flag_overrides_env() {
    let mut ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", common::MINIMAL_PROFILE);
    let empty = tempfile::tempdir().unwrap();

    ctx.cmd
        .arg("render")
        .arg("--profile")
        .arg(&profile)
        .arg("--assets-dir")
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("script asset pre-boot-tuning"));
}

#[test]
fn test_render_missing_script() {
    let ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", common::MINIMAL_PROFILE);
    std::fs::remove_file(ctx.assets.script_path("reboot")).unwrap();

    ctx.new_cmd()
        .arg("render")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to render profile 'minimal'"))
        .stderr(predicate::str::contains("reboot"));
}

#[test]
fn test_render_invalid_profile() {
    let mut ctx = common::nodetune();
    let profile = ctx.profile("profile.yaml", "metadata:\n  name: broken\nspec: {}\n");

    ctx.cmd
        .arg("render")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile:"));
}
