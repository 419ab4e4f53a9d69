//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command with `TIMEAI_HOME` pointed at `home`.
fn run_cli_in(home: &TempDir, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    run_cli_env(home, args, stdin, None)
}

/// Like `run_cli_in`, optionally selecting a `TIMEAI_ENV`.
fn run_cli_env(
    home: &TempDir,
    args: &[&str],
    stdin: Option<&str>,
    env: Option<&str>,
) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_timeai-cli"));
    command
        .args(args)
        .env("TIMEAI_HOME", home.path())
        .env_remove("TIMEAI_ENV")
        .env_remove("RUST_LOG");
    if let Some(env) = env {
        command.env("TIMEAI_ENV", env);
    }

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let home = TempDir::new().unwrap();
    run_cli_in(&home, args, None)
}

#[test]
fn test_ask_housewife() {
    let (code, stdout, _) = run_cli(&["ask", "Create", "timetable", "for", "a", "housewife"]);
    assert_eq!(code, 0, "Ask failed");
    assert!(stdout.contains("Prompt: \"Create timetable for a housewife\""));
    assert!(stdout.contains("Housewife / Homemaker"));
    assert!(!stdout.contains("White-Collar Employee"));
}

#[test]
fn test_ask_without_prompt_uses_default() {
    let (code, stdout, _) = run_cli(&["ask"]);
    assert_eq!(code, 0, "Ask failed");
    assert!(stdout.contains("Prompt: \"Create timetable for a housewife\""));
}

#[test]
fn test_ask_blank_prompt() {
    let (code, stdout, _) = run_cli(&["ask", "   "]);
    assert_eq!(code, 0, "Ask failed");
    assert_eq!(stdout.trim_end(), "Please ask for a timetable.");
}

#[test]
fn test_ask_json() {
    let (code, stdout, _) = run_cli(&["ask", "timetable", "for", "everyone", "--json"]);
    assert_eq!(code, 0, "Ask JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["kind"], "timetable");
    assert_eq!(parsed["categories"].as_array().unwrap().len(), 3);
}

#[test]
fn test_classify() {
    let (code, stdout, _) = run_cli(&["classify", "mechanic", "and", "employee"]);
    assert_eq!(code, 0, "Classify failed");
    assert_eq!(stdout, "employee\nmechanic\n");
}

#[test]
fn test_classify_json() {
    let (code, stdout, _) = run_cli(&["classify", "--json", "all", "mechanics"]);
    assert_eq!(code, 0, "Classify JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["everyone_signal"], true);
    assert_eq!(parsed["matched"], serde_json::json!(["mechanic"]));
}

#[test]
fn test_category_list() {
    let (code, stdout, _) = run_cli(&["category", "list"]);
    assert_eq!(code, 0, "Category list failed");
    assert!(stdout.contains("housewife"));
    assert!(stdout.contains("White-Collar Employee (8 slots)"));
}

#[test]
fn test_category_show() {
    let (code, stdout, _) = run_cli(&["category", "show", "mechanic"]);
    assert_eq!(code, 0, "Category show failed");
    assert!(stdout.starts_with("Mechanic\n--------\n"));
}

#[test]
fn test_category_show_unknown() {
    let (code, _, stderr) = run_cli(&["category", "show", "plumber"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_examples() {
    let (code, stdout, _) = run_cli(&["examples"]);
    assert_eq!(code, 0, "Examples failed");
    assert!(stdout.contains("timetable for everyone"));
}

#[test]
fn test_interactive() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli_in(&home, &["interactive"], Some("mechanic\nexit\noffice\n"));
    assert_eq!(code, 0, "Interactive failed");
    assert!(stdout.starts_with("Try prompts like:"));
    assert!(stdout.contains("Prompt: \"mechanic\""));
    assert!(!stdout.contains("Prompt: \"office\""));
}

#[test]
fn test_config_set_get_list() {
    let home = TempDir::new().unwrap();
    let args = [
        "config",
        "set",
        "assistant.default_prompt",
        "make a timetable for mechanic",
    ];
    let (code, _, _) = run_cli_in(&home, &args, None);
    assert_eq!(code, 0, "Config set failed");

    let (code, stdout, _) = run_cli_in(&home, &["config", "get", "assistant.default_prompt"], None);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim_end(), "make a timetable for mechanic");

    let (code, stdout, _) = run_cli_in(&home, &["ask"], None);
    assert_eq!(code, 0, "Ask failed");
    assert!(stdout.contains("Prompt: \"make a timetable for mechanic\""));

    let (code, stdout, _) = run_cli_in(&home, &["config", "list"], None);
    assert_eq!(code, 0, "Config list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_config_rejects_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "set", "ui.dark_mode", "true"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_reset() {
    let (code, stdout, _) = run_cli(&["config", "reset"]);
    assert_eq!(code, 0, "Config reset failed");
    assert!(stdout.contains("config reset to defaults"));
}

#[test]
fn test_completions() {
    let (code, stdout, _) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("timeai-cli"));
}

#[test]
fn test_classify_blank_prompt() {
    let (code, _, stderr) = run_cli(&["classify", "  "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("prompt is empty"));
}

#[test]
fn test_no_json_overrides_configured_json() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli_in(&home, &["config", "set", "output.json", "true"], None);
    assert_eq!(code, 0, "Config set failed");

    let (code, stdout, _) = run_cli_in(&home, &["category", "show", "mechanic"], None);
    assert_eq!(code, 0, "Category show failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());

    let (code, stdout, _) = run_cli_in(&home, &["ask", "--no-json", "mechanic"], None);
    assert_eq!(code, 0, "Ask failed");
    assert!(stdout.starts_with("AI Timetable Result\n"));

    let (code, stdout, _) =
        run_cli_in(&home, &["category", "show", "mechanic", "--no-json"], None);
    assert_eq!(code, 0, "Category show failed");
    assert!(stdout.starts_with("Mechanic\n"));
}

#[test]
fn test_json_and_no_json_conflict() {
    let (code, _, _) = run_cli(&["ask", "--json", "--no-json", "mechanic"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_rejects_bad_log_level() {
    let home = TempDir::new().unwrap();
    let args = ["config", "set", "logging.level", "timeai_core=loud"];
    let (code, _, stderr) = run_cli_in(&home, &args, None);
    assert_eq!(code, 1);
    assert!(stderr.contains("logging.level"));

    let (_, stdout, _) = run_cli_in(&home, &["config", "get", "logging.level"], None);
    assert_eq!(stdout.trim_end(), "warn");
}

#[test]
fn test_dev_env_uses_separate_config_dir() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli_env(&home, &["config", "path"], None, Some("dev"));
    assert_eq!(code, 0, "Config path failed");

    let dev_config = home.path().join(".config").join("timeai-dev").join("config.toml");
    assert_eq!(stdout.trim_end(), dev_config.display().to_string());
    assert!(dev_config.exists());
    assert!(!home.path().join(".config").join("timeai").exists());
}
