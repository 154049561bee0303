//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn quickcalc() -> Command {
    let mut cmd = Command::cargo_bin("quickcalc").expect("binary not found");
    cmd.env_remove("QUICKCALC_KEYS")
        .env_remove("QUICKCALC_MODE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    quickcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator"))
        .stdout(predicate::str::contains("--keys"));
}

#[test]
fn version_flag() {
    quickcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quickcalc"));
}

#[test]
fn five_plus_three() {
    quickcalc()
        .args(["--keys", "5+3=", "-q"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn divide_by_zero_is_infinity() {
    quickcalc()
        .args(["--keys", "6/0=", "-q"])
        .assert()
        .success()
        .stdout("∞\n");
}

#[test]
fn infinity_counts_as_zero_in_later_steps() {
    quickcalc()
        .args(["--keys", "6/0=+1=", "-q"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn quick_percent() {
    quickcalc()
        .args(["-k", "9%", "-q"])
        .assert()
        .success()
        .stdout("0.09\n");
}

#[test]
fn invert_sign() {
    quickcalc()
        .args(["-k", "5~", "-q"])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn whitespace_in_script() {
    quickcalc()
        .args(["--keys", "12 × 3 =", "-q"])
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn script_starting_with_minus() {
    quickcalc()
        .args(["--keys", "-5=", "-q"])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn normal_output_has_header() {
    quickcalc()
        .args(["--keys", "2*21="])
        .assert()
        .success()
        .stdout(predicate::str::contains("QuickCalc (Standard)"))
        .stdout(predicate::str::contains("Result: 42"));
}

#[test]
fn verbose_shows_tape() {
    quickcalc()
        .args(["--keys", "2+3*4=", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tape"))
        .stdout(predicate::str::contains("1. 2 + 3 = 5"))
        .stdout(predicate::str::contains("2. 5 × 4 = 20"))
        .stdout(predicate::str::contains("Result: 20"));
}

#[test]
fn env_var_keys() {
    quickcalc()
        .env("QUICKCALC_KEYS", "7*6=")
        .arg("-q")
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn percent_panel() {
    quickcalc()
        .args(["--base", "200", "--rate", "15", "-q"])
        .assert()
        .success()
        .stdout("15.00% of 200.00 = 30.00\n");
}

#[test]
fn percent_blank_rate_defaults_to_zero() {
    quickcalc()
        .args(["--base", "abc", "-q"])
        .assert()
        .success()
        .stdout("0.00% of 0.00 = 0.00\n");
}

#[test]
fn percent_negative_base() {
    quickcalc()
        .args(["--base", "-50", "--rate", "10", "-q"])
        .assert()
        .success()
        .stdout("10.00% of -50.00 = -5.00\n");
}

#[test]
fn json_output() {
    let output = quickcalc()
        .args(["--keys", "5+3=", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"]["value"], "8");
    assert_eq!(value["display"]["mode_label"], "Standard");
    assert_eq!(value["display"]["menu_expanded"], "false");
    assert_eq!(value["tape"][0]["left"], "5");
    assert_eq!(value["tape"][0]["operator"], "add");
}

#[test]
fn unknown_key_fails_with_input_code() {
    quickcalc()
        .args(["--keys", "5+a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown key 'a' at position 2"));
}

#[test]
fn invalid_mode_fails_with_config_code() {
    quickcalc()
        .args(["--mode", "scientific", "--keys", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid mode: scientific"));
}

#[test]
fn invalid_mode_from_env_fails_with_config_code() {
    quickcalc()
        .env("QUICKCALC_MODE", "bogus")
        .args(["--keys", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid mode: bogus"));
}

#[test]
fn keys_conflict_with_base() {
    quickcalc()
        .args(["--keys", "1", "--base", "2"])
        .assert()
        .failure();
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    quickcalc()
        .args(["--keys", "1.5*4=", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("6\n");
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "6\n");
}

#[test]
fn output_file_unwritable() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("result.txt");
    quickcalc()
        .args(["--keys", "1", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("writing result"));
}

#[test]
fn shell_completion_bash() {
    quickcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quickcalc"));
}

#[test]
fn shell_completion_zsh() {
    quickcalc()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quickcalc"));
}

#[test]
fn shell_completion_fish() {
    quickcalc()
        .args(["--completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quickcalc"));
}
