// End-to-end tests for the `bramble` command-line driver

use std::io::Write;
use std::process::{Command, Output};

fn bramble(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bramble"))
        .args(args)
        .output()
        .expect("failed to run bramble")
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

#[test]
fn no_arguments_prints_usage() {
    let output = bramble(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: bramble <source_path>"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let output = bramble(&["a", "b"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn missing_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bramble");

    let output = bramble(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Could not load source file"));
}

#[test]
fn successful_compilation() {
    let file = source_file("fun main() {\n    var x = 5\n}\n");
    let output = bramble(&[file.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.starts_with("TOKENS\n"));
    assert!(stdout.contains("KEY_FUN\t1:1\tfun\t"));
    assert!(stdout.contains("KEY_VAR\t2:5\tvar\t"));
    assert!(stdout.contains("END_OF_FILE\t4:1\t\t"));
    assert!(stdout.contains("PARSER\n"));
    assert!(stdout.contains("\"name\": \"main\""));
    assert!(stdout.contains("\"name\": \"x\""));
    assert!(stdout.contains("Compilation complete"));
}

#[test]
fn lexical_errors_do_not_stop_compilation() {
    let file = source_file("fun main() { var x = 5 } $");
    let output = bramble(&[file.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("error[E_LEX]: unexpected character '$' on line 1"), "{stderr}");
}

#[test]
fn fatal_syntax_error_exits_with_failure() {
    let file = source_file("fun f( { }");
    let output = bramble(&[file.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("TOKENS"));
    assert!(!stdout.contains("PARSER"));
    assert!(stderr.contains("expected BRACKET_R, got CURLY_L"), "{stderr}");
}
