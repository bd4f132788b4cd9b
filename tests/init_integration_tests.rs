//! Integration tests for the `init` and `config` commands.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_valid_config() {
    let fixture = TestFixture::new();

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.read_file(".doxy-guard.toml").contains("[checker]"));

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read_file(".doxy-guard.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read_file(".doxy-guard.toml").contains("[generator]"));
}

#[test]
fn config_validate_reports_semantic_errors() {
    let fixture = TestFixture::new();
    fixture.create_config("[generator]\ntemperature = 3.5\n");

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("generator.temperature"));
}

#[test]
fn config_show_reports_source() {
    let fixture = TestFixture::new();
    fixture.create_config("[checker]\ndoc_window = 7\n");

    doxy_guard!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".doxy-guard.toml"))
        .stdout(predicate::str::contains("doc_window = 7"));
}

#[test]
fn config_show_json_without_config() {
    let fixture = TestFixture::new();

    let output = doxy_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checker"]["doc_window"], 15);
    assert_eq!(json["generator"]["providers"].as_array().unwrap().len(), 3);
}

#[test]
fn guidelines_prints_rules() {
    doxy_guard!()
        .args(["--no-config", "guidelines"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Reference example (reference.h)"));
}

#[test]
fn help_lists_commands() {
    doxy_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fix"))
        .stdout(predicate::str::contains("guidelines"));
}
