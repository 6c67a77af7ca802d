//! Show the syntax tree of a program.

use std::path::PathBuf;

use super::exit::Exit;
use super::loader::{load_program, origin};
use super::run_common::parse_program;

pub struct AstArgs {
    pub program_path: PathBuf,
    pub lines: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) -> Exit {
    let source = match load_program(&args.program_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return Exit::Failure;
        }
    };

    let program = match parse_program(&source, &origin(&args.program_path), args.color) {
        Ok(program) => program,
        Err(exit) => return exit,
    };

    print!(
        "{}",
        program
            .printer()
            .with_lines(args.lines)
            .with_spans(args.spans)
            .colored(args.color)
            .dump()
    );
    Exit::Success
}
