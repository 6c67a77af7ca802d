//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep clap-level types
//! (such as [`ColorChoice`]); the `From` impls settle them for the handlers.

use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;
use thrower_core::{DEFAULT_TARGET, RunConfig};

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::run::RunArgs;
use crate::commands::selftest::SelftestArgs;

/// Flags shared by `run` and `selftest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFlags {
    pub target: String,
    pub suffix: Option<String>,
    pub compute: Option<i64>,
    pub deadline_secs: Option<u64>,
    pub json: bool,
}

impl RunFlags {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            target: m
                .get_one::<String>("target")
                .cloned()
                .unwrap_or_else(|| DEFAULT_TARGET.to_owned()),
            suffix: m.get_one::<String>("suffix").cloned(),
            compute: m.get_one::<i64>("compute").copied(),
            deadline_secs: m.get_one::<u64>("deadline").copied(),
            json: m.get_flag("json"),
        }
    }

    /// Flags layered over `base`: explicit flags win, then whatever `base` already holds.
    pub fn config(&self, base: RunConfig) -> RunConfig {
        let mut config = base.suffix_from(self.suffix.clone());
        if let Some(compute) = self.compute {
            config = config.compute(compute);
        }
        if let Some(secs) = self.deadline_secs {
            config = config.deadline(Duration::from_secs(secs));
        }
        config
    }
}

pub struct RunParams {
    pub program_path: PathBuf,
    pub flags: RunFlags,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            flags: RunFlags::from_matches(m),
            quiet: m.get_flag("quiet"),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            program_path: p.program_path,
            target: p.flags.target.clone(),
            config: p.flags.config(RunConfig::from_env()),
            json: p.flags.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub program_path: PathBuf,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            quiet: m.get_flag("quiet"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program_path: p.program_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub program_path: PathBuf,
    pub lines: bool,
    pub spans: bool,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            lines: m.get_flag("lines"),
            spans: m.get_flag("spans"),
            quiet: m.get_flag("quiet"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            program_path: p.program_path,
            lines: p.lines,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SelftestParams {
    pub flags: RunFlags,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl SelftestParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            flags: RunFlags::from_matches(m),
            quiet: m.get_flag("quiet"),
            color: parse_color(m),
        }
    }
}

impl From<SelftestParams> for SelftestArgs {
    fn from(p: SelftestParams) -> Self {
        Self {
            target: p.flags.target.clone(),
            config: p.flags.config(RunConfig::from_env()),
            json: p.flags.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Required by clap, so only empty when matches came from another command.
fn program_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("program_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
