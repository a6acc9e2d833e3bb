//! Command-line runner tests
//!
//! Runs the `ls8` binary and checks exit codes, stdout, and stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn ls8(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ls8"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn demo(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
        .display()
        .to_string()
}

/// Writes `contents` to a unique file under the system temp dir.
fn temp_program(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ls8-cli-{}-{}.ls8", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ========== Clean Halt ==========

#[test]
fn test_print8_exits_zero() {
    let output = ls8(&[&demo("print8.ls8")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "8\n");
}

#[test]
fn test_call_demo_prints_only_program_output() {
    let output = ls8(&[&demo("call.ls8"), "--trace"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "20\n30\n36\n60\n");
    assert!(stderr(&output).contains("TRACE: "));
}

#[test]
fn test_disassemble_does_not_run() {
    let output = ls8(&[&demo("print8.ls8"), "--disassemble"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "00: 82 00 08  LDI R0,8\n03: 47 00     PRN R0\n05: 01        HLT\n"
    );
}

// ========== Argument Errors ==========

#[test]
fn test_no_arguments_is_usage_error() {
    let output = ls8(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_two_programs_is_usage_error() {
    let output = ls8(&["a.ls8", "b.ls8"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

// ========== Load Errors ==========

#[test]
fn test_missing_file_exits_one() {
    let output = ls8(&["definitely/not/here.ls8"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("couldn't read"));
}

#[test]
fn test_strict_rejects_malformed_line() {
    let path = temp_program("strict", "00000001\nhello\n");

    let lenient = ls8(&[path.to_str().unwrap()]);
    let strict = ls8(&[path.to_str().unwrap(), "--strict"]);
    fs::remove_file(&path).unwrap();

    assert_eq!(lenient.status.code(), Some(0));
    assert!(stderr(&lenient).contains("skipping malformed program line"));

    assert_eq!(strict.status.code(), Some(1));
    assert!(stderr(&strict).contains("\"hello\" is not an 8-bit binary literal"));
}

// ========== Execution Errors ==========

#[test]
fn test_illegal_instruction_exits_one() {
    let path = temp_program("illegal", "00000000\n");
    let output = ls8(&[path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("illegal instruction 0x00 at PC 0x00"));
}

#[test]
fn test_output_before_fault_reaches_stdout() {
    // PRN R0, then fall off the end onto a zero byte
    let path = temp_program("fault", "01000111\n00000000\n");
    let output = ls8(&[path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "0\n");
    assert!(stderr(&output).contains("TRACE: 02 |"));
}

#[test]
fn test_exhausted_step_budget_exits_one() {
    // JMP R0 with R0 = 0 spins forever
    let path = temp_program("spin", "01010100\n00000000\n");
    let output = ls8(&[path.to_str().unwrap(), "--max-steps", "10"]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("did not halt within 10 instructions"));
}
