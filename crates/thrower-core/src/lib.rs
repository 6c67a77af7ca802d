#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the thrower compiler, VM and CLI.
//!
//! - [`Value`]: the language's value space (integers and strings)
//! - [`Register`]: numbered storage cell index
//! - [`Target`]: the DNS server under test
//! - [`RunConfig`]: operational defaults (budget, costs, resolve suffix)

mod config;
mod target;
mod value;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod target_tests;

pub use config::{
    DEFAULT_COMPUTE, DEFAULT_DEADLINE, DEFAULT_STEP_COMPUTE, DEFAULT_STEP_DURATION, DEFAULT_SUFFIX,
    RESOLVE_COMPUTE, RESOLVE_TIMEOUT, RunConfig, SUFFIX_ENV,
};
pub use target::{DEFAULT_TARGET, Target, TargetError};
pub use value::{Register, Value};
