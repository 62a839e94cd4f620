//! Host settings
//!
//! Gameplay constants are fixed; these only control how the host drives a
//! session. Loaded from a JSON file, every field optional.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TICK_HZ;

/// Failure to read or parse a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read settings {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid settings {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Logical ticks per second
    pub tick_hz: u32,
    /// Ticks to simulate in a headless run
    pub max_ticks: u64,

    // === Demo ===
    /// Let the autopilot play
    pub autopilot: bool,
    /// Ticks between autopilot decisions
    pub autopilot_interval: u32,
    /// Start a new run after game over instead of stopping
    pub restart_on_game_over: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: DEFAULT_TICK_HZ,
            max_ticks: 1800,

            autopilot: true,
            autopilot_interval: 6,
            restart_on_game_over: false,
        }
    }
}

impl Settings {
    /// Seconds per logical tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{}; using default settings", err);
                Self::default()
            }
        }
    }
}
