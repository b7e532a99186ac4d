//! A button-driven pocket calculator.
//!
//! The [`calculator`] module holds the state machine. The rest is the glue a
//! front-end needs: configuration, click sounds, keyboard mapping and a
//! session type that turns taps into display frames.

pub mod app;
pub mod calculator;
pub mod config;
pub mod keymap;
pub mod sound;

pub use app::{App, Frame};
pub use calculator::{ButtonKind, ButtonSpec, CalculatorState, OperationSymbol, reduce};
pub use config::{Config, ConfigError, Preferences};
