use std::str::FromStr;

use serveolist::Error;
use serveolist::report::{Level, Reporter};

#[test]
fn level_parses_known_names() {
    assert_eq!(Level::from_str("info").unwrap(), Level::Info);
    assert_eq!(Level::from_str("WARNING").unwrap(), Level::Warning);
    assert_eq!(Level::from_str("Error").unwrap(), Level::Error);
}

#[test]
fn level_rejects_unknown_names() {
    match Level::from_str("debug") {
        Err(Error::InvalidLevel(level)) => assert_eq!(level, "debug"),
        other => panic!("expected InvalidLevel, got {other:?}"),
    }
}

#[test]
fn report_returns_the_message_unchanged() {
    let reporter = Reporter::new();
    let message = "Resposta do Spotify não contém o ID do usuário.";

    assert_eq!(reporter.report(message, Level::Info), message);
    assert_eq!(reporter.report(message, Level::Warning), message);
    assert_eq!(reporter.report(message, Level::Error), message);
}

#[test]
fn os_error_text_is_neutral_about_its_caller() {
    // Os covers tunnel process failures and settings-file reads alike, so
    // its message must not name either.
    let err = Error::Os(std::io::Error::other("acesso negado"));
    let text = err.to_string();
    assert!(text.starts_with("Erro de sistema:"));
    assert!(!text.contains("túnel"));
    assert!(!text.contains("SSH"));
}

#[test]
fn fail_hands_back_the_typed_error() {
    let reporter = Reporter::new();
    let err = reporter.fail(Error::ExecutableNotFound("ssh".to_string()));
    match err {
        Error::ExecutableNotFound(program) => assert_eq!(program, "ssh"),
        other => panic!("fail must not change the error kind, got {other}"),
    }
}
