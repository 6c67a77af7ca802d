mod cli;
mod commands;
mod logging;

use clap::ArgMatches;
use cli::{AstParams, CheckParams, RunParams, SelftestParams, build_cli};
use commands::exit::Exit;

fn main() {
    let matches = build_cli().get_matches();
    let exit = Exit::guard(|| dispatch(&matches));
    std::process::exit(exit.code());
}

fn dispatch(matches: &ArgMatches) -> Exit {
    match matches.subcommand() {
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            logging::init(params.quiet);
            commands::run::run(params.into())
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.quiet);
            commands::check::run(params.into())
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            logging::init(params.quiet);
            commands::ast::run(params.into())
        }
        Some(("selftest", m)) => {
            let params = SelftestParams::from_matches(m);
            logging::init(params.quiet);
            commands::selftest::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    }
}
