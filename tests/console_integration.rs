use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn organizer(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("organizer").unwrap();
    cmd.env("ORGANIZER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_contacts_persist_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .write_stdin("add John 050-123-45-67\nadd-birthday John 15.03.1990\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Birthday added."))
        .stdout(predicate::str::contains("Good bye!"));

    assert!(temp_dir.path().join("addressbook.json").exists());
    assert!(temp_dir.path().join("notes.json").exists());

    organizer(temp_dir.path())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("John"))
        .stdout(predicate::str::contains("+380501234567"))
        .stdout(predicate::str::contains("birthday: 15.03.1990"));
}

#[test]
fn test_end_of_input_still_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .write_stdin("add-note \"water the plants\" home garden\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note "));

    organizer(temp_dir.path())
        .args(["find-tag", "GARD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("water the plants"))
        .stdout(predicate::str::contains("[home, garden]"));
}

#[test]
fn test_errors_are_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .write_stdin("add John\nadd John 12\nshow-email Nobody\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not enough parameters"))
        .stdout(predicate::str::contains("invalid phone format"))
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_unknown_command_suggestion_can_be_confirmed() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .write_stdin("show-note\ny\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Did you mean: show-notes"))
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_unknown_command_without_match() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .arg("zzz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command 'zzz': not found"));
}

#[test]
fn test_corrupt_snapshot_starts_fresh() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("addressbook.json"), "{ broken").unwrap();

    organizer(temp_dir.path())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."))
        .stdout(predicate::str::contains("Error").not());
}

#[test]
fn test_rejected_snapshot_is_kept_aside() {
    let temp_dir = tempfile::tempdir().unwrap();
    let original = concat!(
        r#"{"version":1,"entries":[{"name":"John","phones":["123"],"#,
        r#""birthday":null,"email":null,"address":null}]}"#
    );
    std::fs::write(temp_dir.path().join("addressbook.json"), original).unwrap();

    organizer(temp_dir.path())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));

    let kept = std::fs::read_to_string(temp_dir.path().join("addressbook.json.corrupt")).unwrap();
    assert_eq!(kept, original);
}

#[test]
fn test_sort_notes_one_shot() {
    let temp_dir = tempfile::tempdir().unwrap();

    organizer(temp_dir.path())
        .write_stdin("add-note first a\nadd-note second a b c\nadd-note third a b\nexit\n")
        .assert()
        .success();

    let output = organizer(temp_dir.path())
        .args(["sort-notes", "tag-count", "desc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let second = stdout.find("second").unwrap();
    let third = stdout.find("third").unwrap();
    let first = stdout.find("first").unwrap();
    assert!(second < third && third < first, "{stdout}");
}
