use std::process::{Command, Output};

fn bank_balance(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bank_balance"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bank_balance")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn million() {
    let output = bank_balance(&["1000000"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "days: 18\nfirst deposit:  154\nsecond deposit: 144\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn exact_fibonacci() {
    let output = bank_balance(&["55"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "days: 11\nfirst deposit:  1\nsecond deposit: 0\n");
}

#[test]
fn zero() {
    let output = bank_balance(&["0"]);
    assert_eq!(stdout(&output), "days: 1\nfirst deposit:  1\nsecond deposit: 0\n");
}

#[test]
fn repeated_runs_match() {
    let first = bank_balance(&["123456789"]);
    let second = bank_balance(&["123456789"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verify_flag_appends_line() {
    let output = bank_balance(&["--verify", "1000000"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "days: 18\nfirst deposit:  154\nsecond deposit: 144\nverified: exact and maximal\n"
    );
}

#[test]
fn time_flag_appends_line() {
    let output = bank_balance(&["--time", "1000"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("days: 11\nfirst deposit:  8\nsecond deposit: 2\nprocess time: "));
}

#[test]
fn missing_argument_is_usage_error() {
    let output = bank_balance(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}

#[test]
fn extra_argument_is_usage_error() {
    let output = bank_balance(&["1", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_integer_fails_fast() {
    let output = bank_balance(&["12abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid target sum \"12abc\""));
}

#[test]
fn negative_integer_fails_fast() {
    let output = bank_balance(&["-7"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be non-negative"));
}

#[test]
fn help_exits_cleanly() {
    let output = bank_balance(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("target_sum"));
}
