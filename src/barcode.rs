use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of digits in a scannable barcode (EAN-13 shape).
pub const BARCODE_LEN: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("barcode must be {} digits (got {found})", BARCODE_LEN)]
    InvalidLength { found: usize },
    #[error("non-digit character '{found}' at position {position}")]
    NonDigit { position: usize, found: char },
}

/// Which of the two digit layouts carries the stats.
///
/// `First` packs HP/ST/DF into the leading seven digits and is selected when
/// digit 2 is `9` and digit 9 is `5`. Every other barcode uses `Last`, which
/// derives the stats from digits 8..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    First,
    Last,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::First => write!(f, "first"),
            Layout::Last => write!(f, "last"),
        }
    }
}

/// A validated 13-digit barcode, stored as digit values `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barcode {
    digits: [u8; BARCODE_LEN],
}

impl Barcode {
    /// Accepts exactly 13 ASCII digits; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, BarcodeError> {
        let found = input.chars().count();
        if found != BARCODE_LEN {
            return Err(BarcodeError::InvalidLength { found });
        }
        let mut digits = [0u8; BARCODE_LEN];
        for (position, ch) in input.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(BarcodeError::NonDigit { position, found: ch });
            }
            digits[position] = ch as u8 - b'0';
        }
        Ok(Self { digits })
    }

    /// Digit value at a 0-based position.
    ///
    /// Panics when `position >= 13`; callers index fixed positions only.
    pub fn digit(&self, position: usize) -> u8 {
        self.digits[position]
    }

    pub fn layout(&self) -> Layout {
        if self.digit(2) == 9 && self.digit(9) == 5 {
            Layout::First
        } else {
            Layout::Last
        }
    }

    /// Reads `range` as a base-10 number, most significant digit first.
    pub(crate) fn number(&self, range: std::ops::Range<usize>) -> u32 {
        self.digits[range]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }
}

impl FromStr for Barcode {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Barcode::parse(s)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_thirteen_digits() {
        let code: Barcode = "4901234567890".parse().unwrap();
        let digits: Vec<u8> = (0..BARCODE_LEN).map(|i| code.digit(i)).collect();
        assert_eq!(digits, vec![4, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
        assert_eq!(code.to_string(), "4901234567890");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Barcode::parse("12345"),
            Err(BarcodeError::InvalidLength { found: 5 })
        );
        assert_eq!(
            Barcode::parse(""),
            Err(BarcodeError::InvalidLength { found: 0 })
        );
        assert_eq!(
            Barcode::parse("12345678901234"),
            Err(BarcodeError::InvalidLength { found: 14 })
        );
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            Barcode::parse("123456789012a"),
            Err(BarcodeError::NonDigit {
                position: 12,
                found: 'a'
            })
        );
        // full-width digits are not ASCII
        assert_eq!(
            Barcode::parse("１２３４５６７８９０１２３"),
            Err(BarcodeError::NonDigit {
                position: 0,
                found: '１'
            })
        );
    }

    #[test]
    fn layout_needs_both_marker_digits() {
        assert_eq!(Barcode::parse("0090000005000").unwrap().layout(), Layout::First);
        assert_eq!(Barcode::parse("0090000004000").unwrap().layout(), Layout::Last);
        assert_eq!(Barcode::parse("0080000005000").unwrap().layout(), Layout::Last);
    }

    #[test]
    fn number_reads_big_endian() {
        let code = Barcode::parse("1295020305000").unwrap();
        assert_eq!(code.number(0..3), 129);
        assert_eq!(code.number(3..5), 50);
        assert_eq!(code.number(5..7), 20);
    }

    #[test]
    #[should_panic]
    fn digit_out_of_range_panics() {
        let code = Barcode::parse("0000000000000").unwrap();
        code.digit(BARCODE_LEN);
    }
}
