//! Calculator core: the pending-operation state machine behind the keypad.
//!
//! This module provides:
//! - The closed set of button symbols and how buttons are routed
//! - An arithmetic engine holding the accumulator and one pending operation
//! - An input controller that tracks typed text and derives the display
//! - Number formatting for settled values

mod action;
mod controller;
mod engine;
mod format;
mod symbol;

pub use action::{ButtonKind, ButtonSpec};
pub use controller::{CalculatorState, DisplayState, ERROR_DISPLAY, reduce};
pub use engine::{
    ArithmeticEngine, BinaryOperator, Operation, PendingBinaryOperation, UnaryOperator, operation,
};
pub use format::{
    DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_SCIENTIFIC_THRESHOLD, FormatError, FormatStyle,
    MAX_FRACTION_DIGITS_LIMIT, NumberFormatter,
};
pub use symbol::{OperationSymbol, UnknownToken};
