//! Tests for CLI dispatch logic.

use std::path::PathBuf;
use std::time::Duration;

use thrower_core::{DEFAULT_COMPUTE, DEFAULT_DEADLINE, RunConfig};

use super::*;
use crate::cli::commands::{ast_command, check_command, run_command, selftest_command};

#[test]
fn run_defaults() {
    let m = run_command()
        .try_get_matches_from(["run", "probe.thr"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.program_path, PathBuf::from("probe.thr"));
    assert_eq!(params.flags.target, "127.0.0.1:1053");
    assert_eq!(params.flags.suffix, None);
    assert_eq!(params.flags.compute, None);
    assert_eq!(params.flags.deadline_secs, None);
    assert!(!params.flags.json);
    assert!(!params.quiet);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn run_all_flags() {
    let m = run_command()
        .try_get_matches_from([
            "run",
            "-",
            "--target",
            "10.0.0.53:53",
            "--suffix",
            ".lab.",
            "--compute",
            "50",
            "--deadline",
            "30",
            "--json",
            "-q",
            "--color",
            "never",
        ])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.program_path, PathBuf::from("-"));
    assert_eq!(params.flags.target, "10.0.0.53:53");
    assert_eq!(params.flags.suffix.as_deref(), Some(".lab."));
    assert_eq!(params.flags.compute, Some(50));
    assert_eq!(params.flags.deadline_secs, Some(30));
    assert!(params.flags.json);
    assert!(params.quiet);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn flags_override_config() {
    let m = run_command()
        .try_get_matches_from(["run", "p.thr", "--suffix", ".lab.", "--compute", "5", "--deadline", "2"])
        .unwrap();
    let config = RunParams::from_matches(&m).flags.config(RunConfig::new());

    assert_eq!(config.suffix, ".lab.");
    assert_eq!(config.compute, 5);
    assert_eq!(config.deadline, Duration::from_secs(2));
}

#[test]
fn absent_flags_keep_config() {
    let m = run_command().try_get_matches_from(["run", "p.thr"]).unwrap();
    let base = RunConfig::new().suffix(".env.");
    let config = RunParams::from_matches(&m).flags.config(base);

    assert_eq!(config.suffix, ".env.");
    assert_eq!(config.compute, DEFAULT_COMPUTE);
    assert_eq!(config.deadline, DEFAULT_DEADLINE);
}

#[test]
fn run_requires_program() {
    let result = run_command().try_get_matches_from(["run"]);

    assert!(result.is_err());
}

#[test]
fn run_rejects_negative_compute() {
    let result = run_command().try_get_matches_from(["run", "p.thr", "--compute", "-1"]);

    assert!(result.is_err());
}

#[test]
fn run_rejects_unknown_color() {
    let result = run_command().try_get_matches_from(["run", "p.thr", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "probe.thr", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.program_path, PathBuf::from("probe.thr"));
    assert_eq!(params.color, ColorChoice::Always);
    assert!(ColorChoice::Always.should_colorize());
}

#[test]
fn ast_params() {
    let m = ast_command()
        .try_get_matches_from(["ast", "probe.thr", "--lines"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert!(params.lines);
    assert!(!params.spans);
}

#[test]
fn selftest_takes_run_flags_but_no_program() {
    let m = selftest_command()
        .try_get_matches_from(["selftest", "--target", "127.0.0.1:5353", "--compute", "500"])
        .unwrap();
    let params = SelftestParams::from_matches(&m);

    assert_eq!(params.flags.target, "127.0.0.1:5353");
    assert_eq!(params.flags.compute, Some(500));

    assert!(
        selftest_command()
            .try_get_matches_from(["selftest", "probe.thr"])
            .is_err()
    );
}

#[test]
fn top_level_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["thrower"]).is_err());
    assert!(
        build_cli()
            .try_get_matches_from(["thrower", "check", "probe.thr"])
            .is_ok()
    );
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
