//! Keyboard text to button mapping for the terminal front-end.

use crate::calculator::{ButtonSpec, OperationSymbol};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key per match: the two-letter "AC" or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"AC|\S").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: String, position: usize },
}

/// Map a single key to its symbol.
pub fn symbol_for_key(key: &str) -> Option<OperationSymbol> {
    use OperationSymbol as S;

    let symbol = match key {
        "AC" => S::AllClear,
        "." | "," => S::Decimal,
        "+" => S::Add,
        "-" | "−" => S::Subtract,
        "*" | "x" | "X" | "×" => S::Multiply,
        "/" | "÷" => S::Divide,
        "=" => S::Calculate,
        "%" => S::Percent,
        "n" | "N" | "~" | "±" => S::ChangeSign,
        "c" | "C" => S::Clear,
        _ => {
            let mut chars = key.chars();
            let digit = chars.next()?.to_digit(10)?;
            if chars.next().is_some() {
                return None;
            }
            return OperationSymbol::digit(digit);
        }
    };

    Some(symbol)
}

/// Parse a line of keys into button presses.
///
/// Whitespace is ignored. Positions in errors are byte offsets into `input`.
pub fn parse_keys(input: &str) -> Result<Vec<ButtonSpec>, KeymapError> {
    KEY_TOKEN
        .find_iter(input)
        .map(|m| {
            symbol_for_key(m.as_str())
                .map(ButtonSpec::for_symbol)
                .ok_or_else(|| KeymapError::UnknownKey {
                    key: m.as_str().to_string(),
                    position: m.start(),
                })
        })
        .collect()
}
