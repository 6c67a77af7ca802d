//! Log output for the CLI.
//!
//! Events go to stderr so stdout carries only command output. `RUST_LOG`
//! overrides the level chosen by `--quiet`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const VERBOSE_FILTER: &str = "thrower=debug,thrower_compiler=debug,thrower_vm=debug";
const QUIET_FILTER: &str = "warn";

pub fn filter_directives(quiet: bool) -> &'static str {
    if quiet { QUIET_FILTER } else { VERBOSE_FILTER }
}

pub fn init(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter_directives(quiet).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
