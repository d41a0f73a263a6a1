// ets2emc-cli/tests/cli_integration.rs
//
// End-to-end runs of the ets2emc binary against the core fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const JOB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../ets2emc-core/tests/fixtures/job.json");
const PIPELINE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../ets2emc-core/tests/fixtures/pipeline.json");
const PRESET_HLS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../ets2emc-core/tests/fixtures/preset_hls.json");
const PRESET_MP4: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../ets2emc-core/tests/fixtures/preset_mp4.json");

fn ets2emc() -> Command {
    let mut cmd = Command::cargo_bin("ets2emc").unwrap();
    cmd.env_remove("ETS2EMC_LOG_DIR")
        .env_remove("ETS2EMC_ROLE_ARN")
        .env("NO_COLOR", "1");
    cmd
}

fn job_command() -> Command {
    let mut cmd = ets2emc();
    cmd.args(["job", "--job", JOB, "--pipeline", PIPELINE])
        .args(["--preset", PRESET_HLS, "--preset", PRESET_MP4]);
    cmd
}

#[test]
fn job_conversion_prints_the_document() {
    job_command()
        .args(["--role-arn", "arn:aws:iam::123456789012:role/MediaConvert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HLS_GROUP_SETTINGS"))
        .stdout(predicate::str::contains("\"Role\": \"arn:aws:iam::123456789012:role/MediaConvert\""))
        .stdout(predicate::str::contains("\"CustomerId\": \"42\""))
        .stderr(predicate::str::contains("\"level\": \"ERROR\""));
}

#[test]
fn strict_mode_fails_on_conversion_errors() {
    job_command().arg("--strict").assert().code(2);
}

#[test]
fn inserting_defaults_clears_the_errors() {
    job_command()
        .args(["--insert-defaults", "--strict"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR").not());
}

#[test]
fn job_template_has_a_name_and_no_role() {
    job_command()
        .args(["--name", "vod-template", "--category", "vod", "--role-arn", "arn:ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Name\": \"vod-template\""))
        .stdout(predicate::str::contains("\"Category\": \"vod\""))
        .stdout(predicate::str::contains("arn:ignored").not())
        .stdout(predicate::str::contains("FileInput").not());
}

#[test]
fn preset_conversion_in_camel_case_with_text_diagnostics() {
    ets2emc()
        .args(["preset", "--preset", PRESET_MP4, "--camel", "--diagnostics", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"containerSettings\""))
        .stdout(predicate::str::contains("\"ContainerSettings\"").not())
        .stderr(predicate::str::contains("[WARN]"))
        .stderr(predicate::str::contains("MediaConvert does not support PNG thumbnails."));
}

#[test]
fn missing_input_file_is_reported() {
    ets2emc()
        .args(["preset", "--preset", "/nonexistent/preset.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read /nonexistent/preset.json"));
}

#[test]
fn unresolved_preset_is_reported() {
    ets2emc()
        .args(["job", "--job", JOB, "--pipeline", PIPELINE, "--preset", PRESET_HLS])
        .assert()
        .failure()
        .stderr(predicate::str::contains("which was not provided"));
}

#[test]
fn log_dir_receives_a_run_log() {
    let dir = tempfile::tempdir().unwrap();
    job_command()
        .arg("--log-dir")
        .arg(dir.path())
        .assert()
        .success();

    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("ets2emc_job_run_") && name.ends_with(".log"))
        .collect();
    assert_eq!(logs.len(), 1);
}
