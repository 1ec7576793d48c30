//! End-to-end tests driving the countext binary

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

/// A command isolated from the user's config files and environment
fn countext(cwd: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_countext"));
    command
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG");
    for key in ["IGNORE", "IGNORE_NOEXT", "CASE_INSENSITIVE", "VERBOSE", "MODE", "FORMAT"] {
        command.env_remove(format!("COUNTEXT_{}", key));
    }
    command
}

fn run_with_stdin(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn sample_tree() -> TempDir {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::create_dir_all(root.join("skip")).unwrap();
    fs::write(root.join("a.txt"), "").unwrap();
    fs::write(root.join("b.txt"), "").unwrap();
    fs::write(root.join("c.md"), "").unwrap();
    fs::write(root.join(".gitignore"), "").unwrap();
    fs::write(root.join("sub/README"), "").unwrap();
    fs::write(root.join("sub/d.TXT"), "").unwrap();
    fs::write(root.join("skip/e.txt"), "").unwrap();
    temp_dir
}

#[test]
fn test_counts_explicit_directory() {
    let temp_dir = sample_tree();
    let output = countext(temp_dir.path()).args(["-iskip", "tree"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "file statistics for tree:\n\
         \x20 .gitignore      1\n\
         \x20 .md             1\n\
         \x20 README          1\n\
         \x20 .TXT            1\n\
         \x20 .txt            2\n"
    );
    assert!(stderr(&output).contains("[countext] collecting files ..."));
}

#[test]
fn test_case_insensitive_and_ignore_noext() {
    let temp_dir = sample_tree();
    let output = countext(temp_dir.path())
        .args(["--ignore=skip", "-c", "-n", "tree"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("  .txt            3\n"));
    assert!(!out.contains("README"));
    assert!(!out.contains(".TXT"));
}

#[test]
fn test_one_report_per_directory() {
    let temp_dir = sample_tree();
    let output = countext(temp_dir.path())
        .args(["tree/sub", "tree/skip"])
        .output()
        .unwrap();

    let out = stdout(&output);
    let sub = out.find("file statistics for tree/sub:").unwrap();
    let skip = out.find("file statistics for tree/skip:").unwrap();
    assert!(sub < skip);
}

#[test]
fn test_reads_piped_stdin() {
    let temp_dir = sample_tree();
    let input = "x/one.rs\n\n  y/two.rs  \ntree\nMakefile\r\n";
    let output = run_with_stdin(countext(temp_dir.path()), input);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "file statistics for (stdin):\n\
         \x20 Makefile        1\n\
         \x20 .rs             2\n"
    );
    assert!(stderr(&output).contains("[countext] reading paths from stdin ..."));
}

#[test]
fn test_forced_stdin_ignores_directory_arguments() {
    let temp_dir = sample_tree();
    let mut command = countext(temp_dir.path());
    command.args(["--stdin", "tree"]);
    let output = run_with_stdin(command, "only.c\n");

    assert_eq!(
        stdout(&output),
        "file statistics for (stdin):\n  .c              1\n"
    );
}

#[test]
fn test_empty_directory_prints_header_only() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("empty")).unwrap();

    let output = countext(temp_dir.path()).arg("empty").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "file statistics for empty:\n");
}

#[test]
fn test_json_to_output_file() {
    let temp_dir = sample_tree();
    let output = countext(temp_dir.path())
        .args(["--format", "json", "-o", "counts.json", "tree/sub"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let written = fs::read_to_string(temp_dir.path().join("counts.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[0]["label"], "tree/sub");
    assert_eq!(value[0]["total"], 2);
}

#[test]
fn test_listing_files() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("list.txt"), "a.py\nb.py\nc.pyc\n").unwrap();

    let output = countext(temp_dir.path())
        .args(["-f", "missing.txt", "list.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "file statistics for list.txt:\n\
         \x20 .pyc            1\n\
         \x20 .py             2\n"
    );
    assert!(stderr(&output).contains("missing.txt"));
}

#[test]
fn test_config_file_is_picked_up() {
    let temp_dir = sample_tree();
    fs::write(
        temp_dir.path().join(".countext.toml"),
        "ignore = [\"skip\", \"sub\"]\nmode = \"filename\"\n",
    )
    .unwrap();

    let output = countext(temp_dir.path()).arg("tree").output().unwrap();
    let out = stdout(&output);
    assert!(out.contains("  a.txt           1\n"));
    assert!(!out.contains("e.txt"));
    assert!(!out.contains("README"));
}

#[test]
fn test_broken_config_file_is_critical() {
    let temp_dir = sample_tree();
    fs::write(temp_dir.path().join(".countext.toml"), "ignore = [").unwrap();

    let output = countext(temp_dir.path()).arg("tree").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unknown_flag_is_an_argument_error() {
    let temp_dir = tempdir().unwrap();
    let output = countext(temp_dir.path()).arg("--bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--bogus"));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = tempdir().unwrap();

    let output = countext(temp_dir.path()).arg("--init").output().unwrap();
    assert!(output.status.success());
    assert!(temp_dir.path().join(".countext.toml").exists());

    let output = countext(temp_dir.path()).arg("--init").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("already exists"));
}
