//! CLI integration tests using assert_cmd.
//!
//! The binary reads `questions.json` from its own directory, so each test
//! copies it into a temp directory alongside a fixture question file.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const THREE_QUESTIONS: &str = r#"[
    {"question": "What is 2 + 2?", "options": ["3", "4", "5"], "answer": "4"},
    {"question": "Capital of Italy?", "options": ["Rome", "Milan"], "answer": "Rome"},
    {"question": "Largest ocean?", "options": ["Atlantic", "Indian", "Pacific"], "answer": "Pacific"}
]"#;

/// Copy the built binary into a fresh directory, optionally with questions.
fn install(questions: Option<&str>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let source = Path::new(env!("CARGO_BIN_EXE_quizrun"));
    let binary = dir.path().join(source.file_name().unwrap());
    std::fs::hard_link(source, &binary)
        .or_else(|_| std::fs::copy(source, &binary).map(|_| ()))
        .unwrap();

    if let Some(content) = questions {
        std::fs::write(dir.path().join("questions.json"), content).unwrap();
    }
    (dir, binary)
}

fn quizrun(binary: &Path) -> Command {
    Command::new(binary)
}

#[test]
fn completes_quiz_with_scripted_answers() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    quizrun(&binary)
        .write_stdin("2\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1: What is 2 + 2?"))
        .stdout(predicate::str::contains("Wrong! The correct answer was: Rome"))
        .stdout(predicate::str::contains("Your Score: 2/3 (66.7%)"))
        .stdout(predicate::str::contains("Good effort! Keep practicing!"));
}

#[test]
fn piped_output_is_plain() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    quizrun(&binary)
        .write_stdin("2\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perfect score!"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn invalid_answers_are_reprompted() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    let output = quizrun(&binary)
        .write_stdin("abc\n7\n2\n1\n3\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout
            .matches("Invalid input. Please enter a number between 1 and 3.")
            .count(),
        2
    );
    assert!(stdout.contains("Your Score: 3/3 (100.0%)"));
}

#[test]
fn same_answers_give_same_result() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    let summary = |stdout: Vec<u8>| {
        String::from_utf8(stdout)
            .unwrap()
            .lines()
            .filter(|l| l.contains("Your Score") || l.contains("Keep"))
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    let first = quizrun(&binary).write_stdin("1\n1\n1\n").output().unwrap();
    let second = quizrun(&binary).write_stdin("1\n1\n1\n").output().unwrap();
    assert_eq!(summary(first.stdout), summary(second.stdout));
}

#[test]
fn missing_questions_file_exits_with_error() {
    let (_dir, binary) = install(None);

    quizrun(&binary)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("questions.json"));
}

#[test]
fn malformed_questions_file_exits_with_error() {
    let (_dir, binary) = install(Some("[{\"question\": \"broken\""));

    quizrun(&binary)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse question file"));
}

#[test]
fn answer_outside_options_is_rejected_at_load() {
    let (_dir, binary) = install(Some(
        r#"[{"question": "Q", "options": ["a", "b"], "answer": "c"}]"#,
    ));

    quizrun(&binary)
        .write_stdin("1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not one of the options"))
        .stdout(predicate::str::contains("Q1").not());
}

#[test]
fn empty_questions_file_exits_with_error() {
    let (_dir, binary) = install(Some("[]"));

    quizrun(&binary)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("contains no questions"));
}

#[test]
fn closed_stdin_aborts_session() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    quizrun(&binary)
        .write_stdin("2\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input ended"))
        .stdout(predicate::str::contains("Quiz Complete").not())
        .stdout(predicate::str::ends_with("\n"));
}

#[test]
fn non_utf8_answer_is_reprompted() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    let output = quizrun(&binary)
        .write_stdin(b"\xff\xfe\n2\n1\n3\n".to_vec())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Invalid input.").count(), 1);
    assert!(stdout.contains("Your Score: 3/3 (100.0%)"));
}

#[test]
fn bundled_questions_are_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("questions.json");
    let questions = quizrun_core::parser::load(&path).unwrap();
    assert!(!questions.is_empty());
}

#[test]
fn bundled_questions_run_to_completion() {
    let bundled =
        std::fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("questions.json"))
            .unwrap();
    let count = quizrun_core::parser::load_str(
        &bundled,
        quizrun_core::parser::QuestionFormat::Json,
        Path::new("questions.json"),
    )
    .unwrap()
    .len();
    let (_dir, binary) = install(Some(&bundled));

    quizrun(&binary)
        .write_stdin("1\n".repeat(count))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("/{count} (")));
}

#[test]
fn help_output() {
    let (_dir, binary) = install(None);

    quizrun(&binary)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal multiple-choice quiz runner"));
}

#[test]
fn version_output() {
    let (_dir, binary) = install(None);

    quizrun(&binary)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizrun"));
}

#[test]
fn unknown_flag_is_rejected() {
    let (_dir, binary) = install(Some(THREE_QUESTIONS));

    quizrun(&binary).arg("--shuffle").assert().failure();
}
