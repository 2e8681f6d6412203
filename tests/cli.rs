use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;

fn comlines() -> Command {
    Command::cargo_bin("comlines").unwrap()
}

fn path_with(temp: &TempDir, name: &str, contents: &str) -> String {
    let f = temp.child(name);
    f.write_str(contents).unwrap();
    f.path().to_str().unwrap().to_string()
}

fn stdout_of(args: &[&str]) -> String {
    let output = comlines().args(args).unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn requires_two_files() {
    comlines()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("At least 2 files are required"))
        .stderr(predicate::str::contains("Usage: comlines"));

    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    comlines().arg(&a).assert().code(1).stderr(predicate::str::contains("At least 2 files"));
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    comlines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: comlines"))
        .stdout(predicate::str::contains("--limit <N>"));
    comlines().arg("-h").assert().success().stdout(predicate::str::contains("--diff"));
}

#[test]
fn version_names_the_program() {
    comlines()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("comlines {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn malformed_flags_fail() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    let b = path_with(&temp, "b.txt", "x\n");
    comlines().args(["--limit", "0"]).args([&a, &b]).assert().code(1);
    comlines().arg("--bogus").args([&a, &b]).assert().code(1).stderr(predicate::str::contains("--bogus"));
}

#[test]
fn fail_on_missing_file() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    let missing = temp.path().join("nope.txt");
    let missing = missing.to_str().unwrap();
    comlines()
        .args([a.as_str(), missing])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(format!("can't read {missing}")));
}

#[cfg(target_os = "linux")]
#[test]
fn fail_on_directory_operand() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    let dir = temp.child("subdir");
    dir.create_dir_all().unwrap();
    let dir = dir.path().to_str().unwrap();
    comlines()
        .args([a.as_str(), dir])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(format!("can't read {dir}: Is a directory")));
}

#[test]
fn usage_errors_honor_color() {
    comlines()
        .args(["--color", "always", "a.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b["))
        .stderr(predicate::str::contains("At least 2 files"));
    comlines()
        .args(["--color=never", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b").not());
}

#[test]
fn common_lines_of_two_files() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "apple\nbanana\ncherry\n");
    let b = path_with(&temp, "b.txt", "cherry\ndate\nbanana\n");
    assert_eq!(
        stdout_of(&[&a, &b]),
        format!("Lines common to all 2 files:\n  {a},\n  {b}\n\nFound 2 common lines:\n\nbanana\ncherry\n")
    );
}

#[test]
fn no_common_lines_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "apple\nbanana\n");
    let b = path_with(&temp, "b.txt", "cherry\ndate\n");
    comlines()
        .args([&a, &b])
        .assert()
        .success()
        .stdout("No common lines found across all 2 files\n");
}

#[test]
fn diff_of_three_files() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "apple\nbanana\ncherry\n");
    let b = path_with(&temp, "b.txt", "banana\ncherry\ndate\n");
    let c = path_with(&temp, "c.txt", "cherry\ndate\nelderberry\n");
    let expected = format!(
        "Lines unique to each file (total: 2 unique lines):\n\n\
         Lines only in {a} (1 line):\n  apple\n\n\
         No unique lines in {b}\n\n\
         Lines only in {c} (1 line):\n  elderberry\n\n\
         Lines shared by some files but not all (2 lines):\n\
         \x20 \"banana\" appears in: {a} {b}\n\
         \x20 \"date\" appears in: {b} {c}\n"
    );
    assert_eq!(stdout_of(&["--diff", &a, &b, &c]), expected);
}

#[test]
fn diff_of_identical_files() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "apple\nbanana\n");
    let b = path_with(&temp, "b.txt", "banana\n\napple\napple\n");
    comlines()
        .arg("-d")
        .args([&a, &b])
        .assert()
        .success()
        .stdout("No unique lines found - all files have identical content\n");
}

#[test]
fn blank_lines_are_ignored_and_spaces_matter() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "apple\n\n  banana  \n\n");
    let b = path_with(&temp, "b.txt", "\napple\nbanana\n");
    let output = stdout_of(&["-d", &a, &b]);
    assert!(output.contains(&format!("Lines only in {a} (1 line):\n    banana  \n")));
    assert!(output.contains(&format!("Lines only in {b} (1 line):\n  banana\n")));
}

#[test]
fn crlf_and_lf_files_agree() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "one\r\ntwo\r\n");
    let b = path_with(&temp, "b.txt", "two\none\n");
    assert!(stdout_of(&[&a, &b]).ends_with("Found 2 common lines:\n\none\ntwo\n"));
}

#[test]
fn limit_and_full() {
    let temp = TempDir::new().unwrap();
    let lines = "e\nd\nc\nb\na\n";
    let a = path_with(&temp, "a.txt", lines);
    let b = path_with(&temp, "b.txt", lines);

    let cut = stdout_of(&["--limit", "2", &a, &b]);
    assert!(cut.contains("Found 5 common lines:\n\na\nb\n  ... and 3 more lines (use --full to see all)\n"));
    assert!(cut.ends_with("use --full to see everything or --limit N to change the limit.\n"));

    let full = stdout_of(&["-l", "2", "-f", &a, &b]);
    assert!(full.ends_with("Found 5 common lines:\n\na\nb\nc\nd\ne\n"));
}

#[test]
fn default_limit_is_twenty() {
    let temp = TempDir::new().unwrap();
    let lines: String = (0..25).map(|n| format!("line{n:02}\n")).collect();
    let a = path_with(&temp, "a.txt", &lines);
    let b = path_with(&temp, "b.txt", &lines);
    let output = stdout_of(&[&a, &b]);
    assert!(output.contains("line19\n  ... and 5 more lines"));
    assert!(!output.contains("line20"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    let b = path_with(&temp, "b.txt", "x\n");
    let quiet = comlines().args([&a, &b]).unwrap();
    let verbose = comlines().arg("-v").args([&a, &b]).unwrap();
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(quiet.stderr.is_empty());
    assert!(String::from_utf8(verbose.stderr).unwrap().contains("loaded"));
}

#[test]
fn verbose_logs_follow_color_choice() {
    let temp = TempDir::new().unwrap();
    let a = path_with(&temp, "a.txt", "x\n");
    let b = path_with(&temp, "b.txt", "x\n");
    let plain = comlines().args(["-v", "--color", "never"]).args([&a, &b]).unwrap();
    let plain = String::from_utf8(plain.stderr).unwrap();
    assert!(plain.contains("loaded"));
    assert!(!plain.contains('\x1b'), "{plain:?}");

    let colored = comlines().args(["-v", "--color", "always"]).args([&a, &b]).unwrap();
    assert!(String::from_utf8(colored.stderr).unwrap().contains('\x1b'));
}
