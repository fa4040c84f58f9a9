use serde::Serialize;
use std::fmt;

/// Kind of card a barcode produces, read from the final digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardType {
    Character,
    #[serde(rename = "ItemST")]
    ItemSt,
    #[serde(rename = "ItemDF")]
    ItemDf,
    #[serde(rename = "ItemHP")]
    ItemHp,
}

impl CardType {
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            5 | 6 => CardType::ItemSt,
            7 | 8 => CardType::ItemDf,
            9 => CardType::ItemHp,
            _ => CardType::Character,
        }
    }

    pub fn is_item(self) -> bool {
        self != CardType::Character
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Character => write!(f, "Character"),
            CardType::ItemSt => write!(f, "ItemST"),
            CardType::ItemDf => write!(f, "ItemDF"),
            CardType::ItemHp => write!(f, "ItemHP"),
        }
    }
}

/// Flavor class of the decoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterType {
    Machine,
    Animal,
    Fish,
    Bird,
    Human,
    Unknown,
}

impl CharacterType {
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            0 => CharacterType::Machine,
            1 => CharacterType::Animal,
            2 => CharacterType::Fish,
            3 => CharacterType::Bird,
            4 => CharacterType::Human,
            _ => CharacterType::Unknown,
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterType::Machine => "Machine",
            CharacterType::Animal => "Animal",
            CharacterType::Fish => "Fish",
            CharacterType::Bird => "Bird",
            CharacterType::Human => "Human",
            CharacterType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Result of decoding one barcode. Stats are always multiples of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedItem {
    pub card_type: CardType,
    pub character_type: CharacterType,
    pub hp: u32,
    pub st: u32,
    pub df: u32,
}

impl fmt::Display for DecodedItem {
    /// Five lines: card type, character type, HP, ST, DF.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.card_type)?;
        writeln!(f, "{}", self.character_type)?;
        writeln!(f, "{}", self.hp)?;
        writeln!(f, "{}", self.st)?;
        write!(f, "{}", self.df)
    }
}
