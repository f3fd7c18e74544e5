//! GHOST - the word game where nobody wants to finish the word
//!
//! Players take turns adding a letter to a fragment. The fragment must
//! always start some dictionary word; whoever completes a word earns a
//! letter of G-H-O-S-T, and five letters put them out.

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod player;
pub mod tui;

pub use error::{GhostError, InvalidMove, Result, SetupError};
pub use game::{Dictionary, GameEvent, GameState, Reporter};
pub use player::Player;
