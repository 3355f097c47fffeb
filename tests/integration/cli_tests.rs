//! CLI integration tests
//!
//! Tests for the querydiag command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn querydiag() -> Command {
    Command::cargo_bin("querydiag").unwrap()
}

mod render_command {
    use super::*;

    #[test]
    fn render_inline_query() {
        querydiag()
            .args(["render", "--position", "7", "--message", "unexpected token"])
            .arg("SELECT * FROM t")
            .assert()
            .success()
            .stdout(format!(
                "SELECT * FROM t\n{}^--\n{}Syntax Error: unexpected token\n",
                " ".repeat(14),
                " ".repeat(7)
            ));
    }

    #[test]
    fn render_without_query() {
        querydiag()
            .args(["render", "-p", "2", "-m", "bad literal"])
            .assert()
            .success()
            .stdout("Syntax Error: bad literal at 2\n");
    }

    #[test]
    fn render_execute_at_end() {
        querydiag()
            .args(["render", "--execute", "--position", "-1", "-m", "division by zero", "3 / 0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Execute Error: division by zero"))
            .stdout(predicate::str::contains(format!("\n{}^--\n", " ".repeat(12))));
    }

    #[test]
    fn render_custom_padding() {
        querydiag()
            .args(["render", "-p", "0", "-m", "x", "--padding", "0", "SELECT"])
            .assert()
            .success()
            .stdout("SELECT\n^--\nSyntax Error: x\n");
    }

    #[test]
    fn render_from_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.sql");
        fs::write(&file_path, "  SELECT * FORM t\n").unwrap();

        querydiag()
            .args(["render", "-p", "11", "-m", "expected FROM", "--anchor", "original"])
            .arg("--file")
            .arg(&file_path)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(format!(
                "SELECT * FORM t\n{}^--\n",
                " ".repeat(16)
            )));
    }

    #[test]
    fn render_from_stdin() {
        querydiag()
            .args(["render", "-p", "0", "-m", "empty select", "-"])
            .write_stdin("SELECT FROM users\n")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("SELECT FROM users\n       ^--\n"));
    }
}

mod failures {
    use super::*;

    #[test]
    fn negative_position_fails() {
        querydiag()
            .args(["render", "-p", "-3", "-m", "x", "SELECT"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid error position -3"));
    }

    #[test]
    fn missing_file_fails() {
        let temp = TempDir::new().unwrap();
        querydiag()
            .args(["render", "-p", "0", "-m", "x", "--file"])
            .arg(temp.path().join("missing.sql"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn missing_message_is_usage_error() {
        querydiag()
            .args(["render", "-p", "0"])
            .assert()
            .failure();
    }
}
