mod helpers;

use helpers::cli_runner::CliRunner;
use serde_json::Value;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn cfg_shows_defaults() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["level"]["value"], 1);
    assert_eq!(json["level"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["hands"]["value"], 4);
    assert_eq!(json["discards"]["source"], "default");
}

#[test]
fn env_overrides_file() {
    let file = config_file("level = 2\nseed = 5\ndiscards = 1\n");
    let path = file.path().to_string_lossy().to_string();

    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("ANTE_CONFIG", path.as_str()), ("ANTE_LEVEL", "3")]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["level"]["value"], 3);
    assert_eq!(json["level"]["source"], "env");
    assert_eq!(json["seed"]["value"], 5);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["discards"]["value"], 1);
}

#[test]
fn flag_overrides_env_for_play() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--ante", "2", "--seed", "9"],
        &[("ANTE_LEVEL", "5"), ("ANTE_SEED", "1")],
        "q\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("play: ante=2 seed=9"));
    assert!(res.stdout.contains("Small blind : 800"));
}

#[test]
fn configured_budgets_reach_the_round() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--seed", "9"],
        &[("ANTE_HANDS", "2"), ("ANTE_DISCARDS", "0")],
        "q\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Hands left: 2 | Discards left: 0"));
}

#[test]
fn invalid_config_exits_with_error() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("ANTE_HANDS", "9")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));

    let res = cli.run_with_input(&["play"], &[("ANTE_LEVEL", "x")], "q\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
fn missing_config_file_is_an_error() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("ANTE_CONFIG", "/nonexistent/ante.toml")]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn logs_stay_off_stdout() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--seed", "4"],
        &[("RUST_LOG", "debug")],
        "8\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("hand played"));
    assert!(!res.stdout.contains("hand played"));
}
