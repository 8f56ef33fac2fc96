//! Boardwalk CLI binary.

use boardwalk::cli::{args::BoardwalkArgs, commands::execute_command};
use clap::Parser;
use std::process;

fn main() {
    let args = BoardwalkArgs::parse();

    // Map verbosity onto the log filter unless RUST_LOG overrides it.
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
