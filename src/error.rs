//! Error types for Ghost
//!
//! Fatal conditions (unreadable word list, bad setup, broken terminal) are
//! `GhostError`s and abort the run before or between turns. A rejected
//! letter is an `InvalidMove`: it is reported to the player and the player
//! is asked again.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GhostError>;

/// Fatal errors that end the game.
#[derive(Debug, Error)]
pub enum GhostError {
    /// The word list could not be read
    #[error("could not read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Players or options do not describe a playable game
    #[error("invalid setup: {0}")]
    InvalidSetup(#[from] SetupError),

    /// The config file exists but could not be read
    #[error("could not read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for `Config`
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Terminal or stdout failure
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// A human player's input stream ended
    #[error("input closed while waiting for {player}")]
    InputClosed { player: String },

    /// A player has no letter that keeps the fragment viable
    #[error("{player} has no legal move after \"{fragment}\"")]
    NoLegalMove { player: String, fragment: String },

    /// A human player quit the game
    #[error("game aborted by {player}")]
    Aborted { player: String },
}

/// Reasons a set of players cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("player name {0:?} is used more than once")]
    DuplicatePlayer(String),

    #[error("cannot parse player {0:?} (expected NAME, NAME:human, NAME:cpu or NAME:cpu-easy)")]
    BadPlayerSpec(String),
}

/// A letter that cannot be added to the fragment.
///
/// Never fatal: the player is told why and asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// Not exactly one lowercase letter a-z
    #[error("{0:?} is not a single lowercase letter")]
    NotALetter(String),

    /// No dictionary word starts with the resulting fragment
    #[error("no word starts with \"{0}\"")]
    DeadEnd(String),
}
