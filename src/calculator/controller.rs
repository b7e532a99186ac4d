//! Input controller: turns button taps into engine calls and derives the
//! display.
//!
//! The controller owns the text the user is typing. While that text exists it
//! is shown verbatim (Editing). Operator taps drop the text so the display
//! falls through to the engine's value (Settled). With no text, no
//! accumulator and no pending operand the display shows `Error`.

use super::action::{ButtonKind, ButtonSpec};
use super::engine::ArithmeticEngine;
use super::format::NumberFormatter;
use super::symbol::OperationSymbol;

/// Shown when there is nothing valid to display.
pub const ERROR_DISPLAY: &str = "Error";

const DEFAULT_DISPLAY_TEXT: &str = "0";

/// Which of the three display modes the calculator is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Editing,
    Settled,
    Error,
}

/// Complete calculator state: the engine plus the text being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    engine: ArithmeticEngine,
    text_being_edited: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            engine: ArithmeticEngine::new(),
            text_being_edited: Some(DEFAULT_DISPLAY_TEXT.to_string()),
        }
    }
}

/// Apply one action to a state, returning the next state.
pub fn reduce(mut state: CalculatorState, action: ButtonSpec) -> CalculatorState {
    state.apply(action);
    state
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &ArithmeticEngine {
        &self.engine
    }

    pub fn text_being_edited(&self) -> Option<&str> {
        self.text_being_edited.as_deref()
    }

    /// Route a button tap by its kind.
    pub fn apply(&mut self, action: ButtonSpec) {
        match action.kind {
            ButtonKind::Compute => self.handle_operator_tap(action.symbol),
            ButtonKind::Utility if action.symbol.is_clear() => self.handle_clear_tap(),
            ButtonKind::Utility => self.handle_operator_tap(action.symbol),
            ButtonKind::Number | ButtonKind::DoubleWide => {
                self.handle_digit_or_decimal_tap(action.symbol)
            }
        }
    }

    pub fn handle_digit_or_decimal_tap(&mut self, symbol: OperationSymbol) {
        if !symbol.is_numeric_entry() {
            return;
        }

        let token = symbol.token();
        let updated = match self.text_being_edited.take() {
            Some(text) if symbol == OperationSymbol::Decimal && text.contains(token) => {
                // A second decimal point in the same entry is ignored.
                self.text_being_edited = Some(text);
                return;
            }
            Some(text) if symbol.is_digit() && text == DEFAULT_DISPLAY_TEXT => token.to_string(),
            Some(mut text) => {
                text.push_str(token);
                text
            }
            None => token.to_string(),
        };

        self.set_text(updated);
    }

    /// Operators act only while the engine holds a value.
    pub fn handle_operator_tap(&mut self, symbol: OperationSymbol) {
        if self.engine.accumulator().is_none() {
            return;
        }

        self.engine.perform_operation(symbol);
        self.text_being_edited = None;
    }

    pub fn handle_clear_tap(&mut self) {
        if self.is_clear() {
            self.engine.set_accumulator(None);

            // Only the entry is cleared; the accumulator stays empty.
            if self.engine.pending_left_operand().is_some() {
                self.text_being_edited = None;
            } else {
                self.text_being_edited = Some(DEFAULT_DISPLAY_TEXT.to_string());
            }
        } else {
            self.engine.clear_all();
            self.set_text(DEFAULT_DISPLAY_TEXT.to_string());
        }
    }

    /// True when the user has typed something since the last clear or
    /// computation, so the clear key clears only the current entry.
    pub fn is_clear(&self) -> bool {
        self.text_being_edited
            .as_deref()
            .is_some_and(|text| text != DEFAULT_DISPLAY_TEXT)
    }

    pub fn clear_button_label(&self) -> &'static str {
        if self.is_clear() {
            OperationSymbol::Clear.token()
        } else {
            OperationSymbol::AllClear.token()
        }
    }

    /// The pending operator, for highlighting its button.
    pub fn active_symbol(&self) -> Option<OperationSymbol> {
        self.engine.pending_symbol()
    }

    pub fn display_state(&self) -> DisplayState {
        if self.text_being_edited.is_some() {
            DisplayState::Editing
        } else if self.engine.accumulator().is_some()
            || self.engine.pending_left_operand().is_some()
        {
            DisplayState::Settled
        } else {
            DisplayState::Error
        }
    }

    pub fn display_text(&self, formatter: &NumberFormatter) -> String {
        if let Some(text) = &self.text_being_edited {
            return text.clone();
        }

        let value = self
            .engine
            .accumulator()
            .or_else(|| self.engine.pending_left_operand());

        value
            .and_then(|value| formatter.format(value).ok())
            .unwrap_or_else(|| ERROR_DISPLAY.to_string())
    }

    /// Replace the edit buffer and push its parsed value into the engine.
    /// Unparsable text (a lone ".") clears the accumulator.
    fn set_text(&mut self, text: String) {
        self.engine.set_accumulator(text.parse::<f64>().ok());
        self.text_being_edited = Some(text);
    }
}
