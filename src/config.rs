//! Configuration file
//!
//! `config.toml` lives in the platform config directory. Every key is
//! optional; command-line flags override what the file says.

use crate::error::{GhostError, Result, SetupError};
use crate::player::PlayerSpec;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a game of Ghost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list file; the embedded list when unset
    pub dictionary: Option<PathBuf>,
    /// Seats in order, e.g. `["Ann", "Hal:cpu"]`
    pub players: Vec<String>,
    /// Seed for computer players
    pub seed: Option<u64>,
    /// Line-by-line output instead of the terminal UI
    pub plain: bool,
    /// Clear the screen between turns in plain mode
    pub clear_screen: bool,
    pub pause: PauseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            players: ["John", "Mike", "Christy", "Selena"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: None,
            plain: false,
            clear_screen: true,
            pause: PauseConfig::default(),
        }
    }
}

/// How long results stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseConfig {
    /// After the standings are shown
    pub standings_ms: u64,
    /// After a word is completed or a player eliminated
    pub result_ms: u64,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            standings_ms: 2000,
            result_ms: 1000,
        }
    }
}

impl PauseConfig {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            standings_ms: 0,
            result_ms: 0,
        }
    }

    pub fn standings(&self) -> Duration {
        Duration::from_millis(self.standings_ms)
    }

    pub fn result(&self) -> Duration {
        Duration::from_millis(self.result_ms)
    }
}

/// Platform directories for Ghost, if the home directory can be found.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "ghost")
}

/// `config.toml` in the platform config directory.
pub fn default_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GhostError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| GhostError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `load`, but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(GhostError::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse the configured seats.
    pub fn player_specs(&self) -> std::result::Result<Vec<PlayerSpec>, SetupError> {
        self.players.iter().map(|s| s.parse()).collect()
    }
}
