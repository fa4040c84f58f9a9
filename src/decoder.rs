//! Barcode → item stats transform.
//!
//! Two digit layouts exist (see [`Layout`]). Card type always comes from the
//! last digit; character type and stats depend on the layout.

use tracing::debug;

use crate::barcode::{Barcode, BarcodeError, Layout};
use crate::item::{CardType, CharacterType, DecodedItem};

const ITEM_MAX_HP: u32 = 99_900;
const ITEM_MAX_ST: u32 = 9_900;
const ITEM_MAX_DF: u32 = 9_900;

/// HP at or above which digit 7 grants an ST/DF bonus in the first layout.
const BONUS_HP_THRESHOLD: u32 = 20_000;
const BONUS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stats {
    hp: u32,
    st: u32,
    df: u32,
}

/// Decode a validated barcode. Total over every 13-digit input.
pub fn decode(barcode: &Barcode) -> DecodedItem {
    let layout = barcode.layout();
    let card_type = CardType::from_digit(barcode.digit(12));
    let character_type = match layout {
        Layout::First => CharacterType::from_digit(barcode.digit(7)),
        Layout::Last => CharacterType::from_digit(barcode.digit(12)),
    };
    let stats = match layout {
        Layout::First => read_first(barcode, card_type),
        Layout::Last => read_last(barcode, card_type),
    };
    debug!(%barcode, %layout, %card_type, ?stats, "decoded barcode");

    DecodedItem {
        card_type,
        character_type,
        hp: stats.hp,
        st: stats.st,
        df: stats.df,
    }
}

/// Validate and decode in one step.
pub fn decode_str(input: &str) -> Result<DecodedItem, BarcodeError> {
    let barcode = Barcode::parse(input)?;
    Ok(decode(&barcode))
}

fn read_first(barcode: &Barcode, card_type: CardType) -> Stats {
    let hp = barcode.number(0..3) * 100;
    let mut st = barcode.number(3..5) * 100;
    let mut df = barcode.number(5..7) * 100;

    if hp >= BONUS_HP_THRESHOLD {
        match barcode.digit(7) {
            0 => st += BONUS,
            1 => df += BONUS,
            2 => {
                st += BONUS;
                df += BONUS;
            }
            _ => {}
        }
    }

    if card_type.is_item() {
        Stats {
            hp: hp.min(ITEM_MAX_HP),
            st: st.min(ITEM_MAX_ST),
            df: df.min(ITEM_MAX_DF),
        }
    } else {
        Stats { hp, st, df }
    }
}

fn read_last(barcode: &Barcode, card_type: CardType) -> Stats {
    // digits 9..=12 counted from the left, 1-based
    let d9 = u32::from(barcode.digit(8));
    let d10 = u32::from(barcode.digit(9));
    let d11 = u32::from(barcode.digit(10));
    let d12 = u32::from(barcode.digit(11));

    if card_type.is_item() {
        Stats {
            hp: (d12 / 8) * 10_000 + d11 * 1_000 + d10 * 100,
            st: item_st_thousands(d11) * 1_000 + wrap(d10 + 5, 10) * 100,
            df: item_df_thousands(d10) * 1_000 + wrap(d9 + 7, 10) * 100,
        }
    } else {
        Stats {
            hp: (d12 / 2) * 10_000 + d11 * 1_000 + d10 * 100,
            st: wrap(d11 + 7, 11) * 1_000 + wrap(d10 + 5, 10) * 100,
            df: wrap(d10 + 7, 10) * 1_000 + wrap(d9 + 7, 10) * 100,
        }
    }
}

/// Drops a ten when `value` exceeds `limit`.
fn wrap(value: u32, limit: u32) -> u32 {
    if value > limit { value - 10 } else { value }
}

fn item_st_thousands(value: u32) -> u32 {
    match value {
        5..=8 => 1,
        9 | 0 | 1 | 2 => 2,
        3 | 4 => 2,
        _ => 0,
    }
}

fn item_df_thousands(value: u32) -> u32 {
    match value {
        3..=6 => 0,
        7 | 8 | 9 | 0 => 1,
        1 | 2 => 2,
        _ => 0,
    }
}
