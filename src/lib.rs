//! Decoder for Barcode Battler style 13-digit barcodes.
//!
//! A barcode is validated into a [`Barcode`] and then decoded into a
//! [`DecodedItem`]: card type, character type and HP/ST/DF stats.

mod barcode;
mod decoder;
mod item;
mod render;

pub use barcode::{BARCODE_LEN, Barcode, BarcodeError, Layout};
pub use decoder::{decode, decode_str};
pub use item::{CardType, CharacterType, DecodedItem};
pub use render::{OutputFormat, render_item};
