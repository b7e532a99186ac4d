//! Interactive calculator session.
//!
//! Owns the mutable calculator state on behalf of the UI, fires the click
//! sound and re-derives what the display shows after every tap.

use crate::calculator::{ButtonSpec, CalculatorState, NumberFormatter, OperationSymbol};
use crate::config::Preferences;
use crate::sound::SoundPlayer;
use serde::Serialize;

/// Everything the display needs after an action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub display: String,
    pub clear_label: &'static str,
    pub active_symbol: Option<OperationSymbol>,
}

pub struct App {
    state: CalculatorState,
    preferences: Preferences,
    formatter: NumberFormatter,
    sound: SoundPlayer,
}

impl App {
    pub fn new(preferences: Preferences, formatter: NumberFormatter, sound: SoundPlayer) -> Self {
        Self {
            state: CalculatorState::new(),
            preferences,
            formatter,
            sound,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Handle one button tap.
    pub fn press(&mut self, button: ButtonSpec) -> Frame {
        if self.preferences.sound_enabled {
            self.sound.play(self.preferences.click_effect.clone());
        }

        self.state.apply(button);

        let frame = self.frame();
        tracing::trace!(
            symbol = %button.symbol,
            display = %frame.display,
            accumulator = ?self.state.engine().accumulator(),
            pending = ?self.state.engine().pending_symbol(),
            "Applied button"
        );
        frame
    }

    /// Handle a sequence of taps, returning the frame after the last one.
    pub fn press_all(&mut self, buttons: impl IntoIterator<Item = ButtonSpec>) -> Frame {
        for button in buttons {
            self.press(button);
        }
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            display: self.state.display_text(&self.formatter),
            clear_label: self.state.clear_button_label(),
            active_symbol: self.state.active_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::parse_keys;
    use crate::sound::{SoundEffect, SoundSink};

    struct Counting(flume::Sender<()>);

    impl SoundSink for Counting {
        fn play(&mut self, _effect: &SoundEffect) -> anyhow::Result<()> {
            self.0.send(())?;
            Ok(())
        }
    }

    fn quiet_app() -> App {
        let preferences = Preferences {
            sound_enabled: false,
            ..Preferences::default()
        };
        App::new(preferences, NumberFormatter::default(), SoundPlayer::disabled())
    }

    #[test]
    fn test_frames_follow_taps() {
        let mut app = quiet_app();
        assert_eq!(app.frame().display, "0");
        assert_eq!(app.frame().clear_label, "AC");

        let frame = app.press_all(parse_keys("12+").unwrap());
        assert_eq!(frame.display, "12");
        assert_eq!(frame.active_symbol, Some(OperationSymbol::Add));

        let frame = app.press_all(parse_keys("30").unwrap());
        assert_eq!(frame.display, "30");
        assert_eq!(frame.clear_label, "C");

        let frame = app.press_all(parse_keys("=").unwrap());
        assert_eq!(frame.display, "42");
        assert_eq!(frame.active_symbol, None);
        assert_eq!(app.state().engine().accumulator(), Some(42.0));
    }

    #[test]
    fn test_large_result_uses_scientific_style() {
        let mut app = quiet_app();
        let frame = app.press_all(parse_keys("50000 * 30000 =").unwrap());
        assert_eq!(frame.display, "1.5E9");
    }

    #[test]
    fn test_click_per_tap_when_enabled() {
        let (tx, rx) = flume::unbounded();
        let mut app = App::new(
            Preferences::default(),
            NumberFormatter::default(),
            SoundPlayer::spawn(Counting(tx)),
        );

        app.press_all(parse_keys("1+1=").unwrap());
        drop(app);

        assert_eq!(rx.iter().count(), 4);
    }

    #[test]
    fn test_no_click_when_disabled() {
        let (tx, rx) = flume::unbounded();
        let preferences = Preferences {
            sound_enabled: false,
            ..Preferences::default()
        };
        let mut app = App::new(
            preferences,
            NumberFormatter::default(),
            SoundPlayer::spawn(Counting(tx)),
        );
        assert!(!app.preferences().sound_enabled);

        app.press_all(parse_keys("1+1=").unwrap());
        drop(app);

        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn test_frame_serializes() {
        let mut app = quiet_app();
        let frame = app.press_all(parse_keys("8/").unwrap());
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["display"], "8");
        assert_eq!(json["clear_label"], "AC");
        assert_eq!(json["active_symbol"], "divide");
    }
}
