//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command in `data_dir` and return (stdout, stderr, exit code).
fn run_cli(data_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitpro-cli"))
        .args(args)
        .env("HABITPRO_DATA_DIR", data_dir.path())
        .env_remove("HABITPRO_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &TempDir, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn list_json(data_dir: &TempDir, today: &str) -> Vec<serde_json::Value> {
    let out = run_cli_success(data_dir, &["habit", "list", "--json", "--today", today]);
    serde_json::from_str(&out).expect("habit list --json should print a JSON array")
}

#[test]
fn test_empty_list() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(&dir, &["habit", "list"]);
    assert!(out.contains("Add a habit to start tracking"));
}

#[test]
fn test_add_and_complete_lifecycle() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(&dir, &["habit", "add", "Read", "--category", "personal"]);
    assert!(out.contains("Habit added"));

    let cards = list_json(&dir, "2026-10-19");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["name"], "Read");
    assert_eq!(cards[0]["category"], "Personal");
    assert_eq!(cards[0]["doneToday"], false);
    let id = cards[0]["id"].as_u64().unwrap().to_string();

    let out = run_cli_success(&dir, &["habit", "done", &id, "--today", "2026-10-19"]);
    assert!(out.contains("Marked \"Read\""));

    let (_, stderr, code) = run_cli(&dir, &["habit", "done", &id, "--today", "2026-10-19"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Already completed today"));

    run_cli_success(&dir, &["habit", "done", &id, "--today", "2026-10-20"]);
    let cards = list_json(&dir, "2026-10-20");
    assert_eq!(cards[0]["streak"], 2);
    assert_eq!(cards[0]["doneToday"], true);

    let raw = std::fs::read_to_string(dir.path().join("habit_pro_v5.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["history"], serde_json::json!(["2026-10-19", "2026-10-20"]));
}

#[test]
fn test_blank_name_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["habit", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Enter habit name"));
    assert!(list_json(&dir, "2026-10-19").is_empty());
}

#[test]
fn test_unknown_category_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["habit", "add", "Dig", "--category", "gardening"]);
    assert_ne!(code, 0);
    assert!(list_json(&dir, "2026-10-19").is_empty());

    let (_, _, code) = run_cli(&dir, &["config", "set", "ui.default_category", "gardening"]);
    assert_eq!(code, 1);
    let out = run_cli_success(&dir, &["config", "get", "ui.default_category"]);
    assert!(out.contains("Personal"));
}

#[test]
fn test_delete_unknown_and_known() {
    let dir = TempDir::new().unwrap();
    run_cli_success(&dir, &["habit", "add", "Walk"]);
    run_cli_success(&dir, &["habit", "delete", "1", "--yes"]);
    assert_eq!(list_json(&dir, "2026-10-19").len(), 1);

    let id = list_json(&dir, "2026-10-19")[0]["id"].as_u64().unwrap().to_string();
    let out = run_cli_success(&dir, &["habit", "delete", &id, "--yes"]);
    assert!(out.contains("Habit deleted"));
    assert!(list_json(&dir, "2026-10-19").is_empty());
}

#[test]
fn test_stats_today_and_charts() {
    let dir = TempDir::new().unwrap();
    run_cli_success(&dir, &["habit", "add", "Read"]);
    run_cli_success(&dir, &["habit", "add", "Run", "--category", "fitness"]);
    let id = list_json(&dir, "2026-10-19")[0]["id"].as_u64().unwrap().to_string();
    run_cli_success(&dir, &["habit", "done", &id, "--today", "2026-10-19"]);

    let out = run_cli_success(&dir, &["stats", "today", "--today", "2026-10-19"]);
    let stats: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["pending"], 1);
    assert_eq!(stats["total"], 2);

    let out = run_cli_success(&dir, &["stats", "charts", "--today", "2026-10-19"]);
    let charts: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(charts["weekly"]["kind"], "bar");
    assert_eq!(charts["weekly"]["data"][1], 1);
    assert_eq!(charts["completion"]["data"], serde_json::json!([1, 1]));

    let out = run_cli_success(&dir, &["stats", "dashboard", "--today", "2026-10-19"]);
    let dash: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(dash["best_streak"], 1);
}

#[test]
fn test_remind_check_respects_permission() {
    let dir = TempDir::new().unwrap();
    run_cli_success(&dir, &["habit", "add", "Stretch"]);

    let out = run_cli_success(&dir, &["remind", "check", "--today", "2026-10-19"]);
    assert!(out.contains("Notifications blocked"));

    let out = run_cli_success(&dir, &["notify", "enable"]);
    assert!(out.contains("Notifications enabled"));

    let out = run_cli_success(&dir, &["remind", "check", "--today", "2026-10-19"]);
    assert!(out.contains("[HabitPro Reminder] Don't forget to Stretch!"));

    let out = run_cli_success(&dir, &["remind", "check", "--json", "--today", "2026-10-19"]);
    let events: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "ReminderRaised");
}

#[test]
fn test_remind_run_rejects_oversized_interval() {
    let dir = TempDir::new().unwrap();
    run_cli_success(&dir, &["habit", "add", "Stretch"]);
    let (_, stderr, code) = run_cli(
        &dir,
        &["remind", "run", "--interval", "18446744073709551615", "--ticks", "2"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("interval"));
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(&dir, &["config", "get", "storage.key"]);
    assert_eq!(out.trim(), "habit_pro_v5");

    run_cli_success(&dir, &["config", "set", "reminders.interval_secs", "30"]);
    let out = run_cli_success(&dir, &["config", "get", "reminders.interval_secs"]);
    assert_eq!(out.trim(), "30");

    let (_, _, code) = run_cli(&dir, &["config", "set", "nope.key", "1"]);
    assert_eq!(code, 1);
}

#[test]
fn test_theme_toggle_and_quote() {
    let dir = TempDir::new().unwrap();
    assert!(run_cli_success(&dir, &["theme", "toggle"]).contains("Dark mode on"));
    assert!(run_cli_success(&dir, &["theme", "toggle"]).contains("Light mode on"));
    assert!(!run_cli_success(&dir, &["quote"]).trim().is_empty());
}
