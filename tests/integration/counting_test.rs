//! Library-level counting over real directory trees

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use countext::{
    cli::{InputSource, run_with_progress},
    core::{DirectoryWalker, IgnoreSet, count_source},
    models::config::{GroupBy, OutputFormat, Settings},
    output::ProgressReporter,
    Report,
};

/// Create a small source tree with build output and VCS metadata
fn create_project(base: &Path) {
    fs::create_dir_all(base.join("src/bin")).unwrap();
    fs::create_dir_all(base.join("target/debug")).unwrap();
    fs::create_dir_all(base.join(".git/objects")).unwrap();
    fs::create_dir_all(base.join("docs")).unwrap();

    fs::write(base.join("Cargo.toml"), "").unwrap();
    fs::write(base.join("README"), "").unwrap();
    fs::write(base.join(".gitignore"), "").unwrap();
    fs::write(base.join("src/lib.rs"), "").unwrap();
    fs::write(base.join("src/main.rs"), "").unwrap();
    fs::write(base.join("src/bin/tool.rs"), "").unwrap();
    fs::write(base.join("docs/guide.MD"), "").unwrap();
    fs::write(base.join("docs/api.md"), "").unwrap();
    fs::write(base.join("target/debug/countext.d"), "").unwrap();
    fs::write(base.join(".git/HEAD"), "").unwrap();
    fs::write(base.join(".git/objects/pack"), "").unwrap();
}

fn count_dir(root: &Path, settings: &Settings) -> Report {
    let ignore = IgnoreSet::new(&settings.ignore).unwrap();
    let mut walker = DirectoryWalker::new(root, settings, &ignore);
    count_source(&mut walker, settings, |_| {})
}

fn count_of(report: &Report, key: &str) -> Option<usize> {
    report.entries.iter().find(|e| e.key == key).map(|e| e.count)
}

#[test]
fn test_full_tree_counts() {
    let temp_dir = tempdir().unwrap();
    create_project(temp_dir.path());

    let report = count_dir(temp_dir.path(), &Settings::default());

    assert_eq!(report.total, 11);
    assert_eq!(count_of(&report, ".rs"), Some(3));
    assert_eq!(count_of(&report, "README"), Some(1));
    assert_eq!(count_of(&report, "HEAD"), Some(1));
    assert_eq!(count_of(&report, ".gitignore"), Some(1));
    assert_eq!(count_of(&report, ".md"), Some(1));
    assert_eq!(count_of(&report, ".MD"), Some(1));

    let counts: Vec<usize> = report.entries.iter().map(|e| e.count).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(counts.iter().sum::<usize>(), report.total);
}

#[test]
fn test_ignored_directories_are_pruned() {
    let temp_dir = tempdir().unwrap();
    create_project(temp_dir.path());

    let settings = Settings {
        ignore: vec![".git".to_string(), "glob:targ*".to_string()],
        ..Default::default()
    };
    let report = count_dir(temp_dir.path(), &settings);

    assert_eq!(report.total, 8);
    assert_eq!(count_of(&report, "HEAD"), None);
    assert_eq!(count_of(&report, ".d"), None);
    assert_eq!(count_of(&report, ".rs"), Some(3));
}

#[test]
fn test_case_folding_and_noext_filter() {
    let temp_dir = tempdir().unwrap();
    create_project(temp_dir.path());

    let settings = Settings {
        ignore: vec![".git".to_string(), "target".to_string()],
        ignore_noext: true,
        case_insensitive: true,
        ..Default::default()
    };
    let report = count_dir(temp_dir.path(), &settings);

    assert_eq!(count_of(&report, "README"), None);
    assert_eq!(count_of(&report, ".md"), Some(2));
    assert_eq!(count_of(&report, ".MD"), None);
    assert!(report.entries.iter().all(|e| e.key == e.key.to_lowercase()));
    // .gitignore has a dot, so it survives the filter
    assert_eq!(count_of(&report, ".gitignore"), Some(1));
}

#[test]
fn test_stem_mode() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("main.rs"), "").unwrap();
    fs::write(temp_dir.path().join("main.c"), "").unwrap();
    fs::write(temp_dir.path().join("util.h"), "").unwrap();

    let settings = Settings {
        mode: GroupBy::Stem,
        ..Default::default()
    };
    let report = count_dir(temp_dir.path(), &settings);

    assert_eq!(count_of(&report, "main"), Some(2));
    assert_eq!(count_of(&report, "util"), Some(1));
}

#[test]
fn test_max_depth_limits_the_walk() {
    let temp_dir = tempdir().unwrap();
    create_project(temp_dir.path());

    let settings = Settings {
        max_depth: Some(1),
        ..Default::default()
    };
    let report = count_dir(temp_dir.path(), &settings);

    // Cargo.toml, README and .gitignore only
    assert_eq!(report.total, 3);
}

#[test]
fn test_missing_root_yields_empty_report() {
    let temp_dir = tempdir().unwrap();
    let report = count_dir(&temp_dir.path().join("nope"), &Settings::default());
    assert!(report.is_empty());
    assert_eq!(report.total, 0);
}

#[test]
fn test_csv_run_over_two_roots() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    fs::write(first.path().join("a.txt"), "").unwrap();
    fs::write(first.path().join("b.txt"), "").unwrap();
    fs::write(second.path().join("c.md"), "").unwrap();

    let settings = Settings {
        format: OutputFormat::Csv,
        ..Default::default()
    };
    let input = InputSource::Directories(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let mut out = String::new();
    let progress = ProgressReporter::with_terminal(&settings, false);
    run_with_progress(&settings, &input, &mut out, progress).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "label,key,count");
    assert_eq!(lines[1], format!("{},.txt,2", first.path().display()));
    assert_eq!(lines[2], format!("{},.md,1", second.path().display()));
    assert_eq!(lines.len(), 3);
}
