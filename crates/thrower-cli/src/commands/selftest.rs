//! Built-in demonstration program.

use thrower_core::RunConfig;

use super::exit::Exit;
use super::run_common::execute;

/// Probes `foo`, `bar` and `bad`; the `sleep 10000` branches only run when a
/// server answers differently than expected.
pub const SELFTEST_PROGRAM: &str = r#"
sleep 500
repeat 2 {
    resolve "foo"
    store r1
    if r1 == "127.0.0.1" {
        resolve "bar"
        store r2
        if r2 != "10.10.10.10" {
            sleep 10000
        }
        if r2 == 3 {
            sleep 10000
        }
        if r2 == r1 {
            sleep 10000
        }
        resolve "bad"
        store r2
        assert r2 == ""
    }
    load r1
    store r2
}
"#;

pub struct SelftestArgs {
    pub target: String,
    pub config: RunConfig,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: SelftestArgs) -> Exit {
    execute(
        SELFTEST_PROGRAM,
        "<selftest>",
        &args.target,
        args.config,
        args.json,
        args.color,
    )
}
