use std::fmt;

use crate::item::DecodedItem;

/// How a decoded item is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line: card type, character type, HP, ST, DF.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn render_item(
    item: &DecodedItem,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(item.to_string()),
        OutputFormat::Json => serde_json::to_string(item),
    }
}
