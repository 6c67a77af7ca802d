use std::time::Duration;

use super::*;

#[test]
fn defaults() {
    let config = RunConfig::default();
    assert_eq!(config.suffix, ".example.com.");
    assert_eq!(config.compute, 1000);
    assert_eq!(config.deadline, Duration::from_secs(900));
}

#[test]
fn builder_overrides() {
    let config = RunConfig::new()
        .suffix(".test.")
        .compute(5)
        .deadline(Duration::from_secs(1));
    assert_eq!(config.suffix, ".test.");
    assert_eq!(config.compute, 5);
    assert_eq!(config.deadline, Duration::from_secs(1));
}

#[test]
fn suffix_from_keeps_default_when_absent() {
    assert_eq!(RunConfig::new().suffix_from(None).suffix, DEFAULT_SUFFIX);
    assert_eq!(
        RunConfig::new().suffix_from(Some(".lab.".into())).suffix,
        ".lab."
    );
}

#[test]
fn resolve_costs_more_than_default() {
    assert!(RESOLVE_COMPUTE > DEFAULT_STEP_COMPUTE);
    assert!(RESOLVE_TIMEOUT > DEFAULT_STEP_DURATION);
}
