use std::path::PathBuf;

use super::exit::Exit;
use super::loader::{load_program, origin};
use super::run_common::parse_program;

pub struct CheckArgs {
    pub program_path: PathBuf,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> Exit {
    let source = match load_program(&args.program_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return Exit::Failure;
        }
    };

    // Silent on success (like cargo check)
    match parse_program(&source, &origin(&args.program_path), args.color) {
        Ok(_) => Exit::Success,
        Err(exit) => exit,
    }
}
