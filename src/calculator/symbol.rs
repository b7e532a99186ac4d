//! The closed set of calculator button symbols.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifies what a calculator button does.
///
/// Every symbol carries the literal token shown on its button. Symbols are the
/// only vocabulary shared between the input controller and the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationSymbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Decimal,
    Add,
    Subtract,
    Multiply,
    Divide,
    ChangeSign,
    Percent,
    Calculate,
    Clear,
    AllClear,
}

impl OperationSymbol {
    /// All symbols, in keypad reading order for digits followed by the rest.
    pub const ALL: [OperationSymbol; 20] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Decimal,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::ChangeSign,
        Self::Percent,
        Self::Calculate,
        Self::Clear,
        Self::AllClear,
    ];

    /// The literal text shown on the button.
    pub fn token(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Decimal => ".",
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::ChangeSign => "±",
            Self::Percent => "%",
            Self::Calculate => "=",
            Self::Clear => "C",
            Self::AllClear => "AC",
        }
    }

    /// Map a single decimal digit to its symbol.
    pub fn digit(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(
            self,
            Self::Zero
                | Self::One
                | Self::Two
                | Self::Three
                | Self::Four
                | Self::Five
                | Self::Six
                | Self::Seven
                | Self::Eight
                | Self::Nine
        )
    }

    /// Check if this symbol edits the number being typed (digit or decimal point).
    pub fn is_numeric_entry(self) -> bool {
        self.is_digit() || self == Self::Decimal
    }

    /// Check if this symbol is one of the two clear variants.
    pub fn is_clear(self) -> bool {
        matches!(self, Self::Clear | Self::AllClear)
    }
}

impl fmt::Display for OperationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned when a string is not the token of any symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no calculator symbol has the token {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for OperationSymbol {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.token() == s)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}
