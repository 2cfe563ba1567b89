//! Integration tests for the `th` CLI.
//!
//! Each test points the binary at a task file inside a temp directory via
//! `-f` and verifies stdout and/or file contents. XDG_CONFIG_HOME is also
//! redirected so a developer's real config can't leak in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `th` binary.
fn th_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("th");
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    let tasks = dir.join("tasks.json");
    Command::new(th_bin())
        .args(args)
        .arg("-f")
        .arg(&tasks)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .output()
        .expect("failed to run th")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Pull the new task id out of "added <id> to <list>: <title>".
fn added_id(out: &Output) -> String {
    let text = stdout(out);
    text.split_whitespace().nth(1).unwrap().to_string()
}

#[test]
fn add_then_list_shows_the_task() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["add", "Buy milk high"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("added"));

    let out = run(tmp.path(), &["list"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Buy milk"));
    assert!(text.contains("P1"));
    assert!(text.contains("Pending"));
}

#[test]
fn list_of_empty_store_reports_no_tasks() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["list"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("no tasks in Inbox"));
}

#[test]
fn done_toggles_via_id_prefix() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["add", "flip me"]);
    let id = added_id(&out);
    let prefix = &id[..8];

    let out = run(tmp.path(), &["done", prefix]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("is now done"));

    let out = run(tmp.path(), &["list"]);
    assert!(stdout(&out).contains("Done"));
}

#[test]
fn rm_removes_the_task() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["add", "doomed"]);
    let id = added_id(&out);

    let out = run(tmp.path(), &["rm", &id]);
    assert!(out.status.success());

    let out = run(tmp.path(), &["list"]);
    assert!(stdout(&out).contains("no tasks in Inbox"));
}

#[test]
fn edit_rejects_bad_date_with_nonzero_exit() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["add", "dated"]);
    let id = added_id(&out);

    let out = run(tmp.path(), &["edit", &id, "--due", "13/01/2030"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("due date"));

    // The bad date never landed.
    let out = run(tmp.path(), &["show", &id]);
    assert!(stdout(&out).contains("due: -"));
}

#[test]
fn edit_sets_fields() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["add", "shape me"]);
    let id = added_id(&out);

    let out = run(
        tmp.path(),
        &[
            "edit",
            &id,
            "--priority",
            "P1",
            "--due",
            "2030-01-13",
            "--notes",
            "a note",
            "--recurring",
        ],
    );
    assert!(out.status.success());

    let out = run(tmp.path(), &["show", &id]);
    let text = stdout(&out);
    assert!(text.contains("priority: P1"));
    assert!(text.contains("due: 2030-01-13"));
    assert!(text.contains("recurring: yes"));
    assert!(text.contains("  a note"));
}

#[test]
fn lists_always_includes_inbox() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["add", "work item", "--list", "Work"]);

    let out = run(tmp.path(), &["lists"]);
    let text = stdout(&out);
    assert!(text.contains("Inbox"));
    assert!(text.contains("Work"));

    let out = run(tmp.path(), &["list", "Work"]);
    assert!(stdout(&out).contains("work item"));
}

#[test]
fn json_list_output_parses() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["add", "machine readable p2"]);

    let out = run(tmp.path(), &["list", "--json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "machine readable");
    assert_eq!(rows[0]["priority"], "P2");
    assert_eq!(rows[0]["status"], "Pending");
}

#[test]
fn add_reports_the_task_even_when_saving_fails() {
    let tmp = TempDir::new().unwrap();
    // A directory where the task file should be makes every write fail while
    // leaving the in-memory store usable.
    std::fs::create_dir(tmp.path().join("tasks.json")).unwrap();

    let out = run(tmp.path(), &["add", "ghost"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not saved"));
    let text = stdout(&out);
    assert!(text.contains("added"));
    assert!(text.contains("ghost"));
}

#[test]
fn corrupt_task_file_warns_and_continues_empty() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("tasks.json"), "not json {{{").unwrap();

    let out = run(tmp.path(), &["list"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("warning"));
    assert!(stdout(&out).contains("no tasks in Inbox"));
}

#[test]
fn display_order_follows_priority() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["add", "third thing"]);
    run(tmp.path(), &["add", "first thing p1"]);
    run(tmp.path(), &["add", "second thing p2"]);

    let out = run(tmp.path(), &["list"]);
    let text = stdout(&out);
    let first = text.find("first thing").unwrap();
    let second = text.find("second thing").unwrap();
    let third = text.find("third thing").unwrap();
    assert!(first < second);
    assert!(second < third);
}
