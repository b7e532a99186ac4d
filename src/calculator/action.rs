//! Button actions delivered to the input controller.

use super::symbol::OperationSymbol;

/// Coarse button category, which decides how a tap is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digit or decimal point.
    Number,
    /// A number key spanning two columns (the zero key).
    DoubleWide,
    /// Arithmetic operator or equals.
    Compute,
    /// Clear, change sign and percent.
    Utility,
}

/// A single button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub symbol: OperationSymbol,
    pub kind: ButtonKind,
}

impl ButtonSpec {
    pub const fn new(symbol: OperationSymbol, kind: ButtonKind) -> Self {
        Self { symbol, kind }
    }

    /// The conventional button for a symbol.
    pub fn for_symbol(symbol: OperationSymbol) -> Self {
        use OperationSymbol as S;

        let kind = match symbol {
            S::Zero => ButtonKind::DoubleWide,
            s if s.is_numeric_entry() => ButtonKind::Number,
            S::Add | S::Subtract | S::Multiply | S::Divide | S::Calculate => ButtonKind::Compute,
            _ => ButtonKind::Utility,
        };

        Self::new(symbol, kind)
    }

    /// The five rows of the standard keypad, top to bottom.
    ///
    /// The clear key is listed with the `Clear` symbol; its label switches
    /// between "C" and "AC" at runtime.
    pub fn standard_layout() -> [Vec<ButtonSpec>; 5] {
        use OperationSymbol as S;

        let row = |symbols: &[OperationSymbol]| -> Vec<ButtonSpec> {
            symbols.iter().copied().map(Self::for_symbol).collect()
        };

        [
            row(&[S::Clear, S::ChangeSign, S::Percent, S::Divide]),
            row(&[S::Seven, S::Eight, S::Nine, S::Multiply]),
            row(&[S::Four, S::Five, S::Six, S::Subtract]),
            row(&[S::One, S::Two, S::Three, S::Add]),
            row(&[S::Zero, S::Decimal, S::Calculate]),
        ]
    }
}

impl From<OperationSymbol> for ButtonSpec {
    fn from(symbol: OperationSymbol) -> Self {
        Self::for_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OperationSymbol as S;

    #[test]
    fn test_kind_for_symbol() {
        assert_eq!(ButtonSpec::for_symbol(S::Zero).kind, ButtonKind::DoubleWide);
        assert_eq!(ButtonSpec::for_symbol(S::Five).kind, ButtonKind::Number);
        assert_eq!(ButtonSpec::for_symbol(S::Decimal).kind, ButtonKind::Number);
        assert_eq!(ButtonSpec::for_symbol(S::Divide).kind, ButtonKind::Compute);
        assert_eq!(ButtonSpec::for_symbol(S::Calculate).kind, ButtonKind::Compute);
        assert_eq!(ButtonSpec::for_symbol(S::Percent).kind, ButtonKind::Utility);
        assert_eq!(ButtonSpec::for_symbol(S::AllClear).kind, ButtonKind::Utility);
    }

    #[test]
    fn test_standard_layout() {
        let layout = ButtonSpec::standard_layout();
        let count: usize = layout.iter().map(Vec::len).sum();
        assert_eq!(count, 19);
        assert_eq!(layout[0][0].symbol, S::Clear);
        assert_eq!(layout[4][0].kind, ButtonKind::DoubleWide);
    }
}
