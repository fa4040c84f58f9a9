use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<ExitCode> {
    let cli = cli::parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let outcome = cli::run(&cli, &mut stdout.lock())?;
    Ok(outcome.exit_code())
}

/// Logs go to stderr so stdout carries only the decoded result.
/// `RUST_LOG` overrides the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
