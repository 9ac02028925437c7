//! Tests for error handling and suggestions.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_error_invalid_service_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gradle.properties"), "group=a.b\n").unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["add-service", "9Lives", "-y", "-C"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Illegal characters in service name '9Lives'"))
        .stderr(predicate::str::contains("valid Java identifiers"));
}

#[test]
fn test_error_missing_group() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gradle.properties"), "version=1.0.0\n").unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["add-service", "IFoo", "-y", "-C"])
        .arg(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Could not determine group property"));
}

#[test]
fn test_error_not_a_template_root() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["add-service", "IFoo", "-y", "-C"])
        .arg(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Required file not found"))
        .stderr(predicate::str::contains("--project-dir"));
}

#[test]
fn test_error_invalid_minecraft_version() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["set-minecraft-version", "1.21/../5", "-y", "-C"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid Minecraft version"));
}

#[test]
fn test_error_invalid_mod_id() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gradle.properties"), "group=a.b\nversion=1\n").unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["setup", "--mod-id", "Cool-Mod", "-y", "-C"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid mod id 'Cool-Mod'"));

    assert_eq!(
        fs::read_to_string(temp.path().join("gradle.properties")).unwrap(),
        "group=a.b\nversion=1\n"
    );
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key: 'defaults.lang'"));
}

#[test]
fn test_verbose_error_omits_hint() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("moddy")
        .env("NO_COLOR", "1")
        .args(["open-libs", "forge", "-v", "-C"])
        .arg(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    cargo_bin_cmd!("moddy")
        .args(["-q", "-v", "version"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}
