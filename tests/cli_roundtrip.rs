//! End-to-end CLI flows through the compiled binary.

mod common;

use common::Workspace;
use predicates::prelude::*;

#[test]
fn full_ledger_roundtrip() {
    let ws = Workspace::new();

    ws.rcl(&["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty store"));

    let member = ws.run_json(&["member", "add", "Ann"]);
    let member_id = member["id"].as_str().expect("member id").to_string();

    let session = ws.run_json(&["session", "add", "Week 1", "--date", "2025-01-01"]);
    let session_id = session["id"].as_str().expect("session id").to_string();

    ws.rcl(&["mark", &session_id, &member_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("present"));

    ws.rcl(&["attendance", &session_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("1/1 present"));

    // CSV export to stdout: the exact scenario row
    ws.rcl(&["export", "csv", &session_id, "--out", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name,Email,Phone,Present,Session,Date"))
        .stdout(predicate::str::contains("Ann,,,Yes,Week 1,2025-01-01"));

    // JSON backup to a file, clear, then restore
    ws.rcl(&["export", "json", "--out", "backup.json"])
        .assert()
        .success();
    ws.rcl(&["clear", "--yes"]).assert().success();

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["members"], 0);
    assert_eq!(stats["attendance_records"], 0);

    ws.rcl(&["import", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 1 member(s), 1 session(s), 1 attendance record(s)",
        ));

    let roll = ws.run_json(&["attendance", &session_id]);
    assert_eq!(roll[member_id.as_str()], serde_json::Value::Bool(true));
}

#[test]
fn remove_session_cascades() {
    let ws = Workspace::new();

    let member = ws.run_json(&["member", "add", "Ann"]);
    let member_id = member["id"].as_str().expect("member id").to_string();
    let session = ws.run_json(&["session", "add", "Week 1", "--date", "2025-01-01"]);
    let session_id = session["id"].as_str().expect("session id").to_string();

    ws.run(&["mark", &session_id, &member_id]);
    ws.rcl(&["session", "rm", &session_id]).assert().success();

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["members"], 1);
    assert_eq!(stats["sessions"], 0);
    assert_eq!(stats["attendance_records"], 0);
}

#[test]
fn mark_absent_is_an_explicit_record() {
    let ws = Workspace::new();

    let member = ws.run_json(&["member", "add", "Ann"]);
    let member_id = member["id"].as_str().expect("member id").to_string();
    let session = ws.run_json(&["session", "add", "Week 1", "--date", "2025-01-01"]);
    let session_id = session["id"].as_str().expect("session id").to_string();

    ws.run(&["mark", &session_id, &member_id, "--absent"]);

    let roll = ws.run_json(&["attendance", &session_id]);
    assert_eq!(roll[member_id.as_str()], serde_json::Value::Bool(false));

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["attendance_records"], 1);
    assert_eq!(stats["marked_present"], 0);
}

#[test]
fn invalid_import_is_rejected_without_state_change() {
    let ws = Workspace::new();
    ws.run(&["member", "add", "Ann"]);

    std::fs::write(ws.dir.path().join("bad.json"), r#"{"members":[]}"#).unwrap();
    ws.rcl(&["import", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["members"], 1);
}

#[test]
fn unparsable_import_reports_parse_error() {
    let ws = Workspace::new();

    std::fs::write(ws.dir.path().join("garbage.json"), "not json").unwrap();
    ws.rcl(&["import", "garbage.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn import_writes_a_safety_backup() {
    let ws = Workspace::new();
    ws.run(&["member", "add", "Ann"]);

    std::fs::write(
        ws.dir.path().join("empty.json"),
        r#"{"members":[],"sessions":[],"attendance":[]}"#,
    )
    .unwrap();
    ws.rcl(&["import", "empty.json"]).assert().success();

    let history = ws.dir.path().join(".rollcall").join("history");
    assert!(history.exists());
    assert_eq!(std::fs::read_dir(&history).unwrap().count(), 1);
}

#[test]
fn empty_member_name_is_rejected() {
    let ws = Workspace::new();
    ws.rcl(&["member", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn bad_session_date_is_rejected() {
    let ws = Workspace::new();
    ws.rcl(&["session", "add", "Week 1", "--date", "01/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ISO calendar date"));
}

#[test]
fn unknown_ids_are_surfaced_to_the_user() {
    let ws = Workspace::new();

    ws.rcl(&["member", "rm", "mem-zzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Member not found"));

    ws.rcl(&["attendance", "ses-zzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn clear_requires_confirmation() {
    let ws = Workspace::new();
    ws.run(&["member", "add", "Ann"]);

    ws.rcl(&["clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["members"], 1);
}

#[test]
fn store_flag_overrides_default_location() {
    let ws = Workspace::new();

    ws.rcl(&["--store", "elsewhere/ledger.json", "member", "add", "Ann"])
        .assert()
        .success();

    assert!(ws.dir.path().join("elsewhere").join("ledger.json").exists());
    assert!(!ws.dir.path().join(".rollcall").exists());
}

#[test]
fn corrupt_store_degrades_to_empty() {
    let ws = Workspace::new();

    let data_dir = ws.dir.path().join(".rollcall");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("store.json"), "{broken").unwrap();

    let stats = ws.run_json(&["stats"]);
    assert_eq!(stats["members"], 0);
    assert_eq!(stats["sessions"], 0);
}
