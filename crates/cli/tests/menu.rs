use assert_cmd::Command;
use predicates::prelude::*;

fn libris() -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env("LIBRIS_MENU__CLEAR_SCREEN", "false")
        .env("LIBRIS_CONFIG_DIR", env!("CARGO_MANIFEST_DIR"))
        .env_remove("LIBRIS_ENV")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn exit_from_home_menu() {
    libris()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Books"))
        .stdout(predicate::str::contains(
            "See You Later, Keep Reading, Keep Learning :)",
        ));
}

#[test]
fn invalid_choice_reprompts_before_exit() {
    libris()
        .arg("menu")
        .write_stdin("9\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Input, Please Reconsider"))
        .stdout(predicate::str::contains("[6] Browse Members using Contact number"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    libris()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("See You Later"));
}

#[test]
fn endpoints_lists_every_route() {
    libris()
        .arg("endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("book-by-isbn"))
        .stdout(predicate::str::contains("/books/{isbn}"))
        .stdout(predicate::str::contains("PATCH /issue"));
}

#[test]
fn conflicting_serve_endpoints_are_rejected() {
    libris()
        .args(["serve", "-e", "book-by-isbn", "-e", "book-by-title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conflicts"));
}

#[test]
fn unknown_endpoint_is_a_usage_error() {
    libris()
        .args(["serve", "--endpoint", "books-by-colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown endpoint"));
}
