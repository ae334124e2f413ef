use clap::Parser;
use std::process;

use snapshot_inspect::args::Args;
use snapshot_inspect::config::Config;

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // resolve format and load the report
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not build configuration: {err}");
        process::exit(1);
    });

    if let Err(e) = snapshot_inspect::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
