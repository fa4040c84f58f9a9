//! Shared clap helper types.

use barcode_battler::OutputFormat;
use clap::ValueEnum;

/// Output formats accepted by `--format`.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FormatArg {
    #[default]
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
