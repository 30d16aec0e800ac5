//! tmplgen: line-oriented template preprocessor.
//!
//! This is the main entry point for the `tmplgen` CLI. It parses arguments,
//! sets up logging, runs the templates, and maps errors to exit codes.

mod cli;
mod config;
mod driver;
mod error;
mod events;
mod exit_codes;
mod fs;
mod invocation;
mod output;
mod template;
mod vars;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match driver::execute(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so `--stdout` output stays clean.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
