//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pltform() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pltform"));
    cmd.env_remove("PLTFORM_CONFIG_FILES").env_remove("PLTFORM_CONFIG_DIR");
    cmd
}

fn write_configs() -> TempDir {
    let tmp = TempDir::new().expect("temp config dir");
    fs::write(
        tmp.path().join("base.yml"),
        "default:\n  scoring:\n    weight: 1\n    other_key: keep\nvegas:\n  scoring:\n    weight: 7\n",
    )
    .expect("write base");
    fs::write(tmp.path().join("local.yml"), "default:\n  scoring:\n    weight: 2\n")
        .expect("write local");
    tmp
}

#[test]
fn test_cli_version() {
    let mut cmd = pltform();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("pltform"));
}

#[test]
fn test_cli_help() {
    let mut cmd = pltform();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("profiles"))
        .stdout(predicate::str::contains("rank"))
        .stdout(predicate::str::contains("argv"))
        .stdout(predicate::str::contains("format"));
}

#[test]
fn test_config_merges_files_in_order() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.args(["config", "scoring", "--files", "base.yml,local.yml", "--json", "--config-dir"])
        .arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"weight\": 2"))
        .stdout(predicate::str::contains("\"other_key\": \"keep\""));
}

#[test]
fn test_config_profile_override_yaml() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.args(["config", "scoring", "-f", "base.yml", "--profile", "vegas", "-d"]).arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("weight: 7"))
        .stdout(predicate::str::contains("other_key: keep"));
}

#[test]
fn test_config_files_from_env() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.env("PLTFORM_CONFIG_FILES", "base.yml")
        .env("PLTFORM_CONFIG_DIR", tmp.path())
        .args(["config", "scoring"]);
    cmd.assert().success().stdout(predicate::str::contains("weight: 1"));
}

#[test]
fn test_config_unknown_profile_fails() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.args(["config", "scoring", "--files", "base.yml", "--profile", "nope", "-d"])
        .arg(tmp.path());
    cmd.assert().failure().stderr(predicate::str::contains("profile 'nope' never loaded"));
}

#[test]
fn test_config_requires_files() {
    let mut cmd = pltform();
    cmd.args(["config", "scoring"]);
    cmd.assert().failure().stderr(predicate::str::contains("No config files given"));
}

#[test]
fn test_config_empty_file_fails() {
    let tmp = TempDir::new().expect("temp config dir");
    fs::write(tmp.path().join("empty.yml"), "").expect("write empty");
    let mut cmd = pltform();
    cmd.args(["config", "scoring", "--files", "empty.yml", "-d"]).arg(tmp.path());
    cmd.assert().failure().stderr(predicate::str::contains("empty config"));
}

#[test]
fn test_profiles_lists_sections() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.args(["profiles", "--files", "base.yml,local.yml", "-d"]).arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("default: scoring"))
        .stdout(predicate::str::contains("vegas: scoring"))
        .stdout(predicate::str::contains("local.yml"));
}

#[test]
fn test_rank_average() {
    let mut cmd = pltform();
    cmd.args(["rank", "10", "20", "20", "5"]);
    cmd.assert().success().stdout("3.0\n1.5\n1.5\n4.0\n");
}

#[test]
fn test_rank_min_ascending() {
    let mut cmd = pltform();
    cmd.args(["rank", "--method", "min", "--ascending", "10", "20", "20", "-5"]);
    cmd.assert().success().stdout("2\n3\n3\n1\n");
}

#[test]
fn test_rank_rejects_unknown_method() {
    let mut cmd = pltform();
    cmd.args(["rank", "--method", "dense", "1", "2"]);
    cmd.assert().failure();
}

#[test]
fn test_rank_rejects_non_finite_values() {
    let mut cmd = pltform();
    cmd.args(["rank", "1", "NaN", "2"]);
    cmd.assert().failure().stderr(predicate::str::contains("not a finite number"));
}

#[test]
fn test_config_empty_profile_uses_default() {
    let tmp = write_configs();
    let mut cmd = pltform();
    cmd.args(["config", "scoring", "--files", "base.yml", "--profile", "", "-d"]).arg(tmp.path());
    cmd.assert().success().stdout(predicate::str::contains("weight: 1"));
}

#[test]
fn test_argv_json() {
    let mut cmd = pltform();
    cmd.args(["argv", "a", "b", "x=1", "y=true", "z=", "n=5.5"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"a\""))
        .stdout(predicate::str::contains("\"x\": 1"))
        .stdout(predicate::str::contains("\"y\": true"))
        .stdout(predicate::str::contains("\"z\": null"))
        .stdout(predicate::str::contains("\"n\": 5.5"));
}

#[test]
fn test_format_substitutes_tokens() {
    let mut cmd = pltform();
    cmd.args(["format", "Winner: <TEAM_NAME>", "team_name=Lions"]);
    cmd.assert().success().stdout("Winner: Lions\n");
}

#[test]
fn test_format_missing_token_fails() {
    let mut cmd = pltform();
    cmd.args(["format", "<X> wins"]);
    cmd.assert().failure().stderr(predicate::str::contains("token 'x' not found"));
}
