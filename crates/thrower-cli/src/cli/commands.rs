//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the flags that shape a run.
fn with_run_args(cmd: Command) -> Command {
    cmd.arg(target_arg())
        .arg(suffix_arg())
        .arg(compute_arg())
        .arg(deadline_arg())
        .arg(json_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thrower")
        .about("Budgeted scripting language for probing DNS servers")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run_command())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(selftest_command())
}

/// Parse and run a program.
pub fn run_command() -> Command {
    let cmd = Command::new("run")
        .about("Run a program against a DNS server")
        .after_help(
            r#"EXIT STATUS:
  0   program finished
  10  assertion failed
  11  budget exceeded
  12  program stopped (uninitialized register, negative sleep, resolver fault, ...)
  13  program does not parse
  1   any other error

EXAMPLES:
  thrower run probe.thr
  thrower run probe.thr --target 10.0.0.53:53 --suffix .lab.internal.
  cat probe.thr | thrower run - --compute 200 --deadline 60"#,
        )
        .arg(program_path_arg());

    with_run_args(cmd).arg(quiet_arg()).arg(color_arg())
}

/// Parse a program and report diagnostics.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check a program for syntax errors")
        .after_help(
            r#"EXAMPLES:
  thrower check probe.thr
  thrower check - < probe.thr"#,
        )
        .arg(program_path_arg())
        .arg(quiet_arg())
        .arg(color_arg())
}

/// Show the parsed program tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a program")
        .after_help(
            r#"EXAMPLES:
  thrower ast probe.thr
  thrower ast probe.thr --lines --spans"#,
        )
        .arg(program_path_arg())
        .arg(lines_arg())
        .arg(spans_arg())
        .arg(quiet_arg())
        .arg(color_arg())
}

/// Run the built-in demonstration program.
pub fn selftest_command() -> Command {
    let cmd = Command::new("selftest")
        .about("Run the built-in demonstration program")
        .after_help(
            r#"Expects `foo` to resolve to 127.0.0.1, `bar` to 10.10.10.10 and `bad`
to nothing under the configured suffix.

EXAMPLES:
  thrower selftest
  thrower selftest --target 127.0.0.1:5353"#,
        );

    with_run_args(cmd).arg(quiet_arg()).arg(color_arg())
}
