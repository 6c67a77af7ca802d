//! Shared logic for the run and selftest commands.

use std::collections::BTreeMap;

use serde::Serialize;
use thrower_compiler::{Error, Program};
use thrower_core::{RunConfig, Target, Value};
use thrower_vm::{Interpreter, InterpreterBuilder, Resolve};
use tracing::{error, info};

use super::exit::Exit;

/// Identifier of the single interpreter a CLI invocation runs.
const INTERPRETER_ID: u64 = 1;

/// Final state of a finished run, printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub result: Option<&'a Value>,
    pub last: Option<&'a Value>,
    pub registers: BTreeMap<String, &'a Value>,
    pub remaining_compute: i64,
}

/// Parse `source`, printing diagnostics on failure.
pub fn parse_program(source: &str, origin: &str, color: bool) -> Result<Program, Exit> {
    match thrower_compiler::parse(source) {
        Ok(program) => Ok(program),
        Err(Error::ProgramParseError(diagnostics)) => {
            error!(errors = diagnostics.error_count(), "parser error");
            eprintln!(
                "{}",
                diagnostics
                    .printer()
                    .source(source)
                    .path(origin)
                    .colored(color)
                    .render()
            );
            Err(Exit::ParseError)
        }
        Err(err) => {
            error!(%err, "parser error");
            eprintln!("error: {err}");
            Err(Exit::ParseError)
        }
    }
}

/// Parse, then run against `target`.
///
/// The target is validated only after the program parses, so a broken
/// program reports its syntax errors first.
pub fn execute(
    source: &str,
    origin: &str,
    target: &str,
    config: RunConfig,
    json: bool,
    color: bool,
) -> Exit {
    let program = match parse_program(source, origin, color) {
        Ok(program) => program,
        Err(exit) => return exit,
    };

    let target: Target = match target.parse() {
        Ok(target) => target,
        Err(err) => {
            eprintln!("error: {err}");
            return Exit::Failure;
        }
    };

    info!(%target, origin, "running program");
    run_program(
        Interpreter::for_target(target),
        &program,
        source,
        origin,
        config,
        json,
        color,
    )
}

/// Run a parsed program, print its outcome and map it to an exit.
pub fn run_program<R: Resolve>(
    builder: InterpreterBuilder<R>,
    program: &Program,
    source: &str,
    origin: &str,
    config: RunConfig,
    json: bool,
    color: bool,
) -> Exit {
    let mut interpreter = builder
        .config(config)
        .id(INTERPRETER_ID)
        .build();

    match interpreter.run(program) {
        Ok(result) => {
            let registers = interpreter.registers();
            if json {
                let report = RunReport {
                    result: result.as_ref(),
                    last: registers.last(),
                    registers: registers
                        .iter()
                        .map(|(register, value)| (register.to_string(), value))
                        .collect(),
                    remaining_compute: interpreter.budget().remaining_compute(),
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return Exit::Failure;
                    }
                }
            } else if let Some(last) = registers.last() {
                println!("{last}");
            }
            Exit::Success
        }
        Err(stop) => {
            eprintln!(
                "{}",
                stop.to_diagnostics()
                    .printer()
                    .source(source)
                    .path(origin)
                    .colored(color)
                    .render()
            );
            stop.class().into()
        }
    }
}
