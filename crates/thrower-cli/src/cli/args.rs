//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use thrower_core::DEFAULT_TARGET;

/// Longest accepted `--deadline`, one year.
const MAX_DEADLINE_SECS: u64 = 365 * 24 * 60 * 60;

/// Program file (positional), `-` for stdin.
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Program file, or - to read stdin")
}

/// DNS server under test (--target).
pub fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("IP:PORT")
        .default_value(DEFAULT_TARGET)
        .help("DNS server to query")
}

/// Domain suffix (--suffix).
pub fn suffix_arg() -> Arg {
    Arg::new("suffix")
        .long("suffix")
        .value_name("SUFFIX")
        .help("Suffix appended to every resolved label [env: DNS_SUFFIX] [default: .example.com.]")
}

/// Compute units (--compute).
pub fn compute_arg() -> Arg {
    Arg::new("compute")
        .long("compute")
        .value_name("UNITS")
        .value_parser(value_parser!(i64).range(0..))
        .help("Compute units the program may spend [default: 1000]")
}

/// Wall-clock allowance in seconds (--deadline).
pub fn deadline_arg() -> Arg {
    Arg::new("deadline")
        .long("deadline")
        .value_name("SECS")
        .value_parser(value_parser!(u64).range(0..=MAX_DEADLINE_SECS))
        .help("Seconds before the run is cut off [default: 900]")
}

/// Print a JSON report instead of the bare result (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the final registers and budget as JSON")
}

/// Lower logging to warnings (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only log warnings and errors")
}

/// Show source lines (--lines).
pub fn lines_arg() -> Arg {
    Arg::new("lines")
        .long("lines")
        .action(ArgAction::SetTrue)
        .help("Show the source line of each node")
}

/// Show byte spans (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
