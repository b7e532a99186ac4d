//! User configuration loaded from `config.toml`.
//!
//! Every field is optional. A missing file means defaults.

use crate::calculator::{
    DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_SCIENTIFIC_THRESHOLD, NumberFormatter,
};
use crate::sound::SoundEffect;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Sound played on every tap unless configured otherwise.
pub const DEFAULT_CLICK_EFFECT: &str = "Click2.m4a";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sound: SoundConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub effect: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            effect: DEFAULT_CLICK_EFFECT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_fraction_digits: usize,
    pub scientific_threshold: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            scientific_threshold: DEFAULT_SCIENTIFIC_THRESHOLD,
        }
    }
}

/// Runtime user preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub sound_enabled: bool,
    pub click_effect: SoundEffect,
}

impl Default for Preferences {
    fn default() -> Self {
        Config::default().preferences()
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the file
    /// is missing or broken.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::debug!("No config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{}: {}", err, error_source(&err));
                Self::default()
            }
        }
    }

    /// Load from an explicit path. Unlike [`Config::load`], failures are errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            sound_enabled: self.sound.enabled,
            click_effect: SoundEffect::named(self.sound.effect.clone()),
        }
    }

    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(
            self.display.max_fraction_digits,
            self.display.scientific_threshold,
        )
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tapcalc").join("config.toml"))
}

fn error_source(err: &ConfigError) -> String {
    match err {
        ConfigError::Read { source, .. } => source.to_string(),
        ConfigError::Parse { source, .. } => source.to_string(),
    }
}
