use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tapcalc::keymap::parse_keys;
use tapcalc::sound::{SoundPlayer, TerminalBell};
use tapcalc::{App, Config, Frame};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tapcalc", version, about = "A pocket calculator for the terminal")]
struct Cli {
    /// Key sequence to apply, e.g. "5 + 3 =". Reads lines from stdin when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print frames as JSON.
    #[arg(long)]
    json: bool,

    /// Disable the click sound.
    #[arg(long)]
    no_sound: bool,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            tracing::debug!("Loading config from {:?}", Config::path());
            Config::load()
        }
    };

    let mut preferences = config.preferences();
    if cli.no_sound {
        preferences.sound_enabled = false;
    }

    let sound = if preferences.sound_enabled {
        SoundPlayer::spawn(TerminalBell)
    } else {
        SoundPlayer::disabled()
    };

    let mut app = App::new(preferences, config.formatter(), sound);

    match &cli.keys {
        Some(keys) => {
            let buttons = parse_keys(keys).context("Invalid key sequence")?;
            let frame = app.press_all(buttons);
            print_frame(&frame, cli.json)
        }
        None => run_interactive(&mut app, cli.json),
    }
}

fn run_interactive(app: &mut App, json: bool) -> Result<()> {
    print_frame(&app.frame(), json)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();

        if trimmed == "q" || trimmed == "quit" {
            break;
        }

        // A bare Enter acts as "=".
        let keys = if trimmed.is_empty() { "=" } else { trimmed };

        match parse_keys(keys) {
            Ok(buttons) => {
                let frame = app.press_all(buttons);
                print_frame(&frame, json)?;
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}

fn print_frame(frame: &Frame, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if json {
        serde_json::to_writer(&mut stdout, frame)?;
        writeln!(stdout)?;
    } else {
        let active = frame
            .active_symbol
            .map(|symbol| format!(" {}", symbol))
            .unwrap_or_default();
        writeln!(stdout, "{}  [{}]{}", frame.display, frame.clear_label, active)?;
    }

    stdout.flush()?;
    Ok(())
}
