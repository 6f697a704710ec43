mod cli;
mod commands;

use cli::{CheckParams, NarrowParams, ParseParams, build_cli, verbosity};
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "QFILTER_LOG";

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("parse", m)) => {
            init_logging(verbosity(m));
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into());
        }
        Some(("check", m)) => {
            init_logging(verbosity(m));
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("narrow", m)) => {
            init_logging(verbosity(m));
            let params = NarrowParams::from_matches(m);
            commands::narrow::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `QFILTER_LOG`, then `RUST_LOG`, then a level from `-v` count. Logs go to
/// stderr so stdout stays parseable.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "qfilter=debug,qfilter_lib=debug",
        _ => "qfilter=trace,qfilter_lib=trace",
    };

    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
