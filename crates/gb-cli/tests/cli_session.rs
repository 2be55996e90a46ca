//! Integration tests for the gb-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Name plus first option at every beat: four selections and three events.
const FULL_RUN: &str = "Aldric\n1\n1\n1\n1\n1\n1\n1\n";

fn gemborn() -> Command {
    Command::cargo_bin("gemborn").unwrap()
}

#[test]
fn full_session_reaches_epilogue() {
    gemborn()
        .write_stdin(FULL_RUN)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Choose your new world")
                .and(predicate::str::contains("Skyreach Dominion"))
                .and(predicate::str::contains("Starforge"))
                .and(predicate::str::contains("At the end of the road, Aldric"))
                .and(predicate::str::contains("Chronicle")),
        );
}

#[test]
fn invalid_selection_reprompts_without_advancing() {
    gemborn()
        .write_stdin("Aldric\n9\nnonsense\n1\n1\n1\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid selection '9'")
                .and(predicate::str::contains("invalid selection 'nonsense'"))
                .and(predicate::str::contains("At the end of the road")),
        );
}

#[test]
fn empty_name_admonishes_and_reprompts() {
    gemborn()
        .write_stdin("\nAldric\n1\n1\n1\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a hero needs a name"));
}

#[test]
fn eof_mid_session_exits_nonzero() {
    gemborn()
        .write_stdin("Aldric\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interrupted"));
}

#[test]
fn same_seed_same_transcript() {
    let first = gemborn().write_stdin(FULL_RUN).output().unwrap();
    let second = gemborn().write_stdin(FULL_RUN).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn seed_flag_accepted() {
    gemborn()
        .args(["--seed", "7"])
        .write_stdin(FULL_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("At the end of the road, Aldric"));
}
