//! Command-line interface wiring for the `barcode-battler` binary.
//!
//! Owns the clap definitions and turns one barcode argument into printed
//! stats or the `invalid code.` message.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use barcode_battler::{Barcode, OutputFormat, decode, render_item};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing::debug;

pub mod common;

use common::FormatArg;

/// Printed when the argument is missing or not 13 digits.
pub const INVALID_CODE: &str = "invalid code.";

/// Parsed CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "barcode-battler",
    version,
    about = "Decode a 13-digit barcode into Barcode Battler card stats"
)]
pub struct Cli {
    /// 13-digit barcode to decode.
    pub code: Option<String>,

    /// Output format for a decoded item.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Arguments after the barcode are ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

/// Parse arguments, reading the first raw argument as the barcode when clap
/// meets an argument it does not know.
///
/// Help, version and invalid option values are still reported as clap errors.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(cli),
        Err(err) if err.kind() == ErrorKind::UnknownArgument => Ok(Cli {
            code: args.get(1).map(|arg| arg.to_string_lossy().into_owned()),
            format: FormatArg::Text,
            verbose: 0,
            rest: Vec::new(),
        }),
        Err(err) => Err(err),
    }
}

/// What happened to the barcode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Decoded,
    InvalidCode,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Decoded => ExitCode::SUCCESS,
            Outcome::InvalidCode => ExitCode::from(1),
        }
    }
}

/// Decode the requested barcode and write the result to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    let raw = cli.code.as_deref().unwrap_or_default();
    let barcode = match Barcode::parse(raw) {
        Ok(barcode) => barcode,
        Err(err) => {
            debug!(input = raw, error = %err, "rejected barcode");
            writeln!(out, "{}", INVALID_CODE).context("failed to write output")?;
            return Ok(Outcome::InvalidCode);
        }
    };

    let item = decode(&barcode);
    let format: OutputFormat = cli.format.into();
    let rendered = render_item(&item, format)
        .with_context(|| format!("failed to render item as {}", format))?;
    writeln!(out, "{}", rendered).context("failed to write output")?;
    Ok(Outcome::Decoded)
}
