use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn coursebox(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coursebox").unwrap();
    cmd.arg("--data-dir").arg(home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_session_from_stdin_persists_items() {
    let home = tempfile::tempdir().unwrap();

    coursebox(&home)
        .write_stdin(
            "add / module cg1111 Engineering Principles\n\
             view / modules cg1111 tasks\n\
             add / todo read chapter 1\n\
             add / deadline lab report at: 01/10/2019 23:59\n\
             bye\n\
             add / todo never reached\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Added module CG1111: Engineering Principles"))
        .stdout(predicate::str::contains("Changed from page /main to /modules/CG1111/tasks"))
        .stdout(predicate::str::contains("You currently have 2 tasks in the list."))
        .stdout(predicate::str::contains("Bye! Hope to see you again soon."));

    let tasks = fs::read_to_string(home.path().join("CG1111").join("tasks.txt")).unwrap();
    assert_eq!(
        tasks,
        "T | 0 | read chapter 1\nD | 0 | lab report | 01/10/2019 23:59\n"
    );
    assert_eq!(
        fs::read_to_string(home.path().join("modules.txt")).unwrap(),
        "CG1111 | Engineering Principles\n"
    );
}

#[test]
fn test_batch_removal_through_exec_lines() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("modules.txt"), "CG1111 | EPP\n").unwrap();
    fs::create_dir(home.path().join("CG1111")).unwrap();
    let lines: Vec<String> = (1..=5).map(|i| format!("T | 0 | Task {}", i)).collect();
    fs::write(
        home.path().join("CG1111").join("tasks.txt"),
        lines.join("\n") + "\n",
    )
    .unwrap();

    coursebox(&home)
        .args(["-e", "remove-* modules cg1111 / task 3,1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Noted. I've removed these tasks:"))
        .stdout(predicate::str::contains("You currently have 2 tasks in the list."));

    assert_eq!(
        fs::read_to_string(home.path().join("CG1111").join("tasks.txt")).unwrap(),
        "T | 0 | Task 4\nT | 0 | Task 5\n"
    );
}

#[test]
fn test_rejected_input_keeps_session_alive() {
    let home = tempfile::tempdir().unwrap();

    coursebox(&home)
        .write_stdin("dance / now\nview / modules\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please provide a valid command: '<action> <page> / <content>' or 'bye'",
        ))
        .stdout(predicate::str::contains("Changed from page /main to /modules"));
}

#[test]
fn test_route_flag_prints_only_the_route() {
    let home = tempfile::tempdir().unwrap();

    coursebox(&home)
        .args(["--route", "-e", "populate", "-e", "view / modules cs2101 notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/modules/CS2101/notes"))
        .stdout(predicate::str::contains("Changed from page").not());
}

#[test]
fn test_corrupted_data_is_fatal() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("modules.txt"), "CG1111 | EPP\n").unwrap();
    fs::create_dir(home.path().join("CG1111")).unwrap();
    fs::write(home.path().join("CG1111").join("files.txt"), "F | maybe | x\n").unwrap();

    coursebox(&home)
        .args(["-e", "view / main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupted data in CG1111/files"));
}

#[test]
fn test_config_subcommand_round_trips() {
    let home = tempfile::tempdir().unwrap();

    coursebox(&home)
        .args(["config", "sort_on_add", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sort_on_add = true"));

    coursebox(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export_dir = exports"))
        .stdout(predicate::str::contains("wrap_width = 100"))
        .stdout(predicate::str::contains("sort_on_add = true"));

    coursebox(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key 'colour'"));
}

#[test]
fn test_home_env_is_used_without_flag() {
    let home = tempfile::tempdir().unwrap();

    Command::cargo_bin("coursebox")
        .unwrap()
        .env("COURSEBOX_HOME", home.path())
        .env("NO_COLOR", "1")
        .args(["-e", "add / module cs2113 Software Engineering"])
        .assert()
        .success();

    assert!(home.path().join("modules.txt").exists());
}
