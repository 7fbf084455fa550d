//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::time::{Duration, Instant};

fn clidemo() -> Command {
    let mut cmd = Command::cargo_bin("clidemo").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("CLIDEMO_VERBOSE");
    cmd
}

#[test]
fn test_version_flag() {
    clidemo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clidemo"));
}

#[test]
fn test_help_lists_commands_in_order() {
    let output = clidemo().arg("--help").assert().success().get_output().stdout.clone();
    let help = String::from_utf8(output).unwrap();

    let positions: Vec<usize> = ["greet", "info", "list", "progress"]
        .iter()
        .map(|name| help.find(&format!("  {name}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{help}");
}

#[test]
fn test_unknown_command() {
    clidemo()
        .arg("deploy")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown command 'deploy'"))
        .stderr(predicate::str::contains("greet, info, list, progress"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_missing_command() {
    clidemo()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("a command is required"));
}

#[test]
fn test_unknown_flag() {
    clidemo()
        .args(["info", "--bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"))
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_non_numeric_duration_names_the_flag() {
    clidemo()
        .args(["progress", "--duration", "soon"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"))
        .stderr(predicate::str::contains("--duration"));
}

#[test]
fn test_info_reports_processor_count() {
    let processors = std::thread::available_parallelism().unwrap().get();

    clidemo()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("System Information"))
        .stdout(predicate::str::contains(format!("Processors: {processors} ")));
}

#[test]
fn test_progress_zero_duration_fails_validation() {
    clidemo()
        .args(["progress", "--duration", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("duration"))
        .stdout(predicate::str::contains("All tasks completed").not());
}

#[test]
fn test_progress_negative_duration_fails_validation() {
    clidemo()
        .args(["progress", "--duration", "-4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Duration must be greater than 0."));
}

#[test]
fn test_progress_one_second() {
    let started = Instant::now();

    clidemo()
        .args(["progress", "--duration", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ All tasks completed!"));

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(900), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "{elapsed:?}");
}

#[test]
fn test_greet_defaults() {
    clidemo()
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World! (#1)"))
        .stdout(predicate::str::contains("(#2)").not());
}

#[test]
fn test_greet_with_flags() {
    clidemo()
        .args(["greet", "--name", "Ada", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ada! (#1)"))
        .stdout(predicate::str::contains("Hello, Ada! (#2)"));
}

#[test]
fn test_greet_negative_count_is_rejected() {
    clidemo()
        .args(["greet", "--count", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_list_fallback() {
    clidemo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item List"))
        .stdout(predicate::str::contains("• Apple"))
        .stdout(predicate::str::contains("• Elderberry"));
}

#[test]
fn test_list_comma_and_repeated_items() {
    clidemo()
        .args(["list", "--items", "red,green", "--items", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• red\n• green\n• blue\n"))
        .stdout(predicate::str::contains("Apple").not());
}

#[test]
fn test_verbose_flag_after_command() {
    clidemo()
        .args(["list", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_verbose_flag_kept_on_parse_failure() {
    clidemo()
        .args(["-v", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("Unknown command 'nope'"));
}
