//! Game events sent to the display
//!
//! The engine narrates a game as a sequence of `GameEvent`s. Anything that
//! renders them (a terminal UI, plain stdout, a test recorder) implements
//! `Reporter`.

use crate::error::{InvalidMove, Result};

/// The letters of GHOST, one per loss.
pub const GHOST: &str = "GHOST";

/// The part of "GHOST" a player has earned with `losses` losses.
pub fn record(losses: u32) -> &'static str {
    let n = (losses as usize).min(GHOST.len());
    &GHOST[..n]
}

/// One player's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub losses: u32,
    pub eliminated: bool,
}

impl Standing {
    /// Letters earned so far, e.g. "GH"
    pub fn record(&self) -> &'static str {
        record(self.losses)
    }
}

/// Something that happened during the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round begins with an empty fragment
    RoundStarted { round: u32, standings: Vec<Standing> },
    /// A player is about to be asked for a letter
    TurnStarted { player: String, fragment: String },
    /// A proposed letter was refused; the same player goes again
    LetterRejected {
        player: String,
        letter: String,
        reason: InvalidMove,
    },
    /// A letter was appended to the fragment
    LetterAdded {
        player: String,
        letter: char,
        fragment: String,
    },
    /// The fragment became a word; `player` takes a loss
    WordCompleted {
        player: String,
        word: String,
        losses: u32,
    },
    /// A player reached the loss limit
    PlayerEliminated { player: String },
    /// Standings after the loss was charged
    RoundEnded { round: u32, standings: Vec<Standing> },
    /// One player remains
    GameWon { winner: String },
}

/// Display collaborator. The engine does not depend on what it renders.
pub trait Reporter {
    fn report(&mut self, event: &GameEvent) -> Result<()>;
}
