//! Fire-and-forget click sounds.
//!
//! Taps hand a [`SoundEffect`] to a background worker over a channel and move
//! on. Nothing comes back: a missing asset or failed playback is logged and
//! dropped, and never touches calculator state.

use std::io::Write;
use std::thread::{self, JoinHandle};

/// Identifier of a sound asset, e.g. `Click2.m4a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundEffect(pub String);

impl SoundEffect {
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Something that can play a sound effect.
pub trait SoundSink: Send + 'static {
    fn play(&mut self, effect: &SoundEffect) -> anyhow::Result<()>;
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SoundSink for TerminalBell {
    fn play(&mut self, _effect: &SoundEffect) -> anyhow::Result<()> {
        let mut stderr = std::io::stderr();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _effect: &SoundEffect) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sending half of the sound worker.
///
/// Dropping the player closes the channel; the worker drains what is queued
/// and exits.
pub struct SoundPlayer {
    sender: Option<flume::Sender<SoundEffect>>,
    worker: Option<JoinHandle<()>>,
}

impl SoundPlayer {
    /// Start a worker thread that plays effects on `sink`.
    pub fn spawn(sink: impl SoundSink) -> Self {
        let (sender, receiver) = flume::unbounded::<SoundEffect>();

        let worker = thread::Builder::new()
            .name("tapcalc-sound".to_string())
            .spawn(move || run_worker(sink, receiver));

        match worker {
            Ok(handle) => Self {
                sender: Some(sender),
                worker: Some(handle),
            },
            Err(err) => {
                tracing::debug!("Sound worker unavailable: {}", err);
                Self::disabled()
            }
        }
    }

    /// A player that drops every effect.
    pub fn disabled() -> Self {
        Self {
            sender: None,
            worker: None,
        }
    }

    /// Queue an effect. Never blocks and never reports failure.
    pub fn play(&self, effect: SoundEffect) {
        if let Some(sender) = &self.sender
            && sender.send(effect).is_err()
        {
            tracing::debug!("Sound worker has stopped, dropping effect");
        }
    }
}

impl Drop for SoundPlayer {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::debug!("Sound worker panicked");
        }
    }
}

fn run_worker(mut sink: impl SoundSink, receiver: flume::Receiver<SoundEffect>) {
    for effect in receiver.iter() {
        if let Err(err) = sink.play(&effect) {
            tracing::debug!("Failed to play {}: {:#}", effect.name(), err);
        }
    }
}
