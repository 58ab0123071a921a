use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn porter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("porter").unwrap();
    cmd.env_remove("MAVEN_CENTRAL_USERNAME");
    cmd.env_remove("MAVEN_CENTRAL_PASSWORD");
    cmd
}

#[test]
fn test_promote_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    porter_cmd()
        .current_dir(tmp.path())
        .args(["promote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Porter.toml"));
}

#[test]
fn test_promote_without_credentials_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Porter.toml"),
        "[package]\ngroup = \"io.github.example\"\nartifact = \"demo\"\nversion = \"1.0.0\"\n",
    )
    .unwrap();

    porter_cmd()
        .current_dir(tmp.path())
        .args(["promote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials missing"));
}
