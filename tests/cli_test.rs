mod common;

use clap::Parser;
use common::TestContext;
use confsweep::cli::Args;
use confsweep::processor::SweepOptions;
use predicates::prelude::*;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("confsweep")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.template, PathBuf::from("input.txt"));
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.file_name, "input.txt");
    assert!(!parsed.manifest);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);
    assert!(!parsed.quiet);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--output-dir",
        "runs",
        "--file-name",
        "params.ini",
        "--manifest",
        "--dry-run",
        "--verbose",
        "sweep.ini",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("sweep.ini"));
    let options = SweepOptions::from(&parsed);
    assert_eq!(options.output_dir, PathBuf::from("runs"));
    assert_eq!(options.file_name, "params.ini");
    assert!(options.manifest);
    assert!(options.dry_run);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-o", "runs", "-q"])).unwrap();
    assert_eq!(parsed.output_dir, PathBuf::from("runs"));
    assert!(parsed.quiet);
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    assert!(Args::try_parse_from(make_args(&["-v", "-q"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["a.txt", "b.txt"])).is_err());
}

#[test]
fn test_binary_generates_default_template() {
    let ctx = TestContext::new();
    ctx.write_template("mode = fast slow\nthreads = 4\n");

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 combination(s) of 2 parameter(s)"));

    assert!(ctx.root().join("conf0_mode=fast/input.txt").is_file());
    assert!(ctx.root().join("conf1_mode=slow/input.txt").is_file());
}

#[test]
fn test_binary_dry_run_creates_nothing() {
    let ctx = TestContext::new();
    ctx.write_template("a = 1 2 3\n");

    ctx.cli()
        .args(["--dry-run", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 3 combination(s)"));

    assert!(!ctx.output_dir().exists());
}

#[test]
fn test_binary_reports_missing_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("missing.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot open template file 'missing.txt'"));
}

#[test]
fn test_binary_reports_malformed_range() {
    let ctx = TestContext::new();
    ctx.write_template("dt = 0...x...1\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed range for 'dt'"));
}
