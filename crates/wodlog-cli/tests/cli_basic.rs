//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_input(home, args, "")
}

fn run_cli_with_input(home: &Path, args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wodlog"))
        .args(args)
        .env("WODLOG_HOME", home)
        .env_remove("WODLOG_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("valid JSON output")
}

#[test]
fn test_workout_list() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Fran"));
    assert!(stdout.contains("Cindy"));
}

#[test]
fn test_workout_list_filtered_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["workout", "list", "--type", "amrap", "--json"],
    );
    assert_eq!(code, 0);
    let workouts = json(&stdout);
    let workouts = workouts.as_array().unwrap();
    assert!(!workouts.is_empty());
    assert!(workouts.iter().all(|w| w["type"] == "AMRAP"));
}

#[test]
fn test_workout_list_rejects_unknown_filter() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["workout", "list", "--duration", "forever"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("duration"));
}

#[test]
fn test_workout_show() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "show", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Fran"));
    assert!(stdout.contains("Thrusters"));
}

#[test]
fn test_workout_show_unknown_id_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["workout", "show", "nonexistent-id"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("workout not found: nonexistent-id"));
}

#[test]
fn test_workout_today_is_stable_for_a_date() {
    let home = tempfile::tempdir().unwrap();
    // 2024-01-07 is a Sunday, so it maps to the first workout.
    let (code, stdout, _) = run_cli(
        home.path(),
        &["workout", "today", "--date", "2024-01-07", "--json"],
    );
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["id"], "1");
}

#[test]
fn test_session_record_and_history() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "session",
            "record",
            "1",
            "--result",
            "4:12",
            "--duration",
            "252",
            "--done",
            "fran-thrusters,fran-pull-ups",
            "--rx",
            "--json",
        ],
    );
    assert_eq!(code, 0);
    let result = json(&stdout);
    assert_eq!(result["workoutId"], "1");
    assert_eq!(result["duration"], 252);
    assert_eq!(result["personalRecords"].as_array().unwrap().len(), 2);

    let (code, stdout, _) = run_cli(home.path(), &["history", "last", "--json"]);
    assert_eq!(code, 0);
    let last = json(&stdout);
    assert_eq!(last["result"], "4:12");
    assert_eq!(last["rx"], true);

    let (code, stdout, _) = run_cli(home.path(), &["stats", "--json"]);
    assert_eq!(code, 0);
    let stats = json(&stdout);
    assert_eq!(stats["total_workouts"], 1);
    assert_eq!(stats["personal_records"], 2);
}

#[test]
fn test_session_record_is_silent_for_long_durations() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(
        home.path(),
        &[
            "session",
            "record",
            "3",
            "--result",
            "11:02",
            "--duration",
            "86400000",
            "--json",
        ],
    );
    assert_eq!(code, 0);
    assert!(!stderr.contains('\x07'), "bell on stderr: {stderr:?}");
    assert_eq!(json(&stdout)["duration"], 86_400_000);
}

#[test]
fn test_session_record_rejects_empty_result() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["session", "record", "1", "--result", "  "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("'result' must not be empty"), "stderr: {stderr}");

    let (_, stdout, _) = run_cli(home.path(), &["history", "list", "--json"]);
    assert_eq!(json(&stdout), serde_json::json!([]));
}

#[test]
fn test_session_run_piped() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_with_input(
        home.path(),
        &["session", "run", "1"],
        "s\nt 1\n?\nf\n\n12:45\n",
    );
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("[x] fran-thrusters"));
    assert!(stdout.contains("running "));
    assert!(stdout.contains("[x] 1. Thrusters"));
    assert!(stdout.contains("[ ] 2. Pull-ups"));
    assert!(stdout.contains("result saved: 12:45"));

    let (_, stdout, _) = run_cli(home.path(), &["history", "last", "--json"]);
    let last = json(&stdout);
    assert_eq!(last["workoutName"], "Fran");
    assert_eq!(last["personalRecords"][0]["exercise"], "Thrusters");
}

#[test]
fn test_session_run_eof_discards() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_with_input(home.path(), &["session", "run", "2"], "s\np\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("session discarded"));

    let (_, stdout, _) = run_cli(home.path(), &["history", "last"]);
    assert!(stdout.contains("No workouts yet."));
}

#[test]
fn test_pr_add_list_delete() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["pr", "add", "Back Squat", "140kg"]);
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(home.path(), &["pr", "list", "--json"]);
    let records = json(&stdout);
    assert_eq!(records[0]["exercise"], "Back Squat");
    assert_eq!(records[0]["value"], "140kg");
    let id = records[0]["id"].as_str().unwrap().to_string();

    // Declining the prompt keeps the record.
    let (code, stdout, _) = run_cli_with_input(home.path(), &["pr", "delete", &id], "n\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Kept."));

    let (code, _, _) = run_cli(home.path(), &["pr", "delete", &id, "--yes"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["pr", "list", "--json"]);
    assert_eq!(json(&stdout), serde_json::json!([]));
}

#[test]
fn test_pr_add_reports_validation_error() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["pr", "add", " ", "100kg"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("'exercise' must not be empty"), "stderr: {stderr}");
}

#[test]
fn test_auth_login_status_logout() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        home.path(),
        &["auth", "login", "--email", "jane.doe@example.com", "--password", "secret1"],
    );
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(home.path(), &["auth", "status", "--json"]);
    let user = json(&stdout);
    assert_eq!(user["email"], "jane.doe@example.com");
    assert_eq!(user["name"], "jane.doe");

    let (code, _, _) = run_cli(home.path(), &["auth", "logout"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["auth", "status"]);
    assert!(stdout.contains("Not signed in."));
}

#[test]
fn test_auth_register_validates() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &[
            "auth", "register", "--name", "J", "--email", "j@example.com", "--password", "secret1",
        ],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("at least 2"));
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "session.haptic_interval_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "60");

    let (code, _, _) = run_cli(
        home.path(),
        &["config", "set", "session.haptic_interval_secs", "30"],
    );
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "session.haptic_interval_secs"]);
    assert_eq!(stdout.trim(), "30");

    let (code, _, _) = run_cli(home.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
}
