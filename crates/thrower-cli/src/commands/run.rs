use std::path::PathBuf;

use thrower_core::RunConfig;

use super::exit::Exit;
use super::loader::{load_program, origin};
use super::run_common::execute;

pub struct RunArgs {
    pub program_path: PathBuf,
    pub target: String,
    pub config: RunConfig,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: RunArgs) -> Exit {
    let source = match load_program(&args.program_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return Exit::Failure;
        }
    };

    execute(
        &source,
        &origin(&args.program_path),
        &args.target,
        args.config,
        args.json,
        args.color,
    )
}
