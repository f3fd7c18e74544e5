//! Players: anything that can propose a letter
//!
//! The engine only sees the `Player` trait. A player may be a person at the
//! console, a person at the terminal UI, or the computer.

pub mod computer;
pub mod console;

pub use computer::{ComputerPlayer, Skill};
pub use console::ConsoleHuman;

use crate::error::{InvalidMove, Result, SetupError};
use crate::game::dictionary::Dictionary;
use std::str::FromStr;
use std::sync::Arc;

/// A participant at the table.
pub trait Player {
    /// Display name; unique within a game.
    fn name(&self) -> &str;

    /// Propose the next letter for `fragment`.
    ///
    /// Anything may come back; the engine rejects what is not a single
    /// lowercase letter that keeps the fragment viable.
    fn request_letter(&mut self, fragment: &str) -> Result<String>;

    /// The last proposed letter was refused. The player will be asked again.
    fn notify_invalid(&mut self, letter: &str, reason: &InvalidMove);
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer(Skill),
}

/// A seat description such as `Ann`, `Bob:human` or `Hal:cpu-easy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerKind {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().to_lowercase().as_str() {
            "human" => Some(PlayerKind::Human),
            "cpu" | "computer" => Some(PlayerKind::Computer(Skill::Normal)),
            "cpu-easy" => Some(PlayerKind::Computer(Skill::Easy)),
            _ => None,
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = SetupError;

    /// Only a known kind after the last ':' is split off, so names may
    /// contain colons (`Dr:Who`, `Dr:Who:cpu`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, kind) = s
            .rsplit_once(':')
            .and_then(|(name, suffix)| PlayerKind::from_suffix(suffix).map(|kind| (name, kind)))
            .unwrap_or((s, PlayerKind::Human));

        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::BadPlayerSpec(s.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            kind,
        })
    }
}

/// Turn seat descriptions into players.
///
/// Computer players share `dictionary`. With a `seed`, the computer in seat
/// `i` is seeded with `seed + i` so a whole game can be replayed.
pub fn build_players<F>(
    specs: &[PlayerSpec],
    dictionary: &Arc<Dictionary>,
    seed: Option<u64>,
    mut make_human: F,
) -> Vec<Box<dyn Player>>
where
    F: FnMut(&str) -> Box<dyn Player>,
{
    specs
        .iter()
        .enumerate()
        .map(|(seat, spec)| match spec.kind {
            PlayerKind::Human => make_human(&spec.name),
            PlayerKind::Computer(skill) => {
                let dictionary = Arc::clone(dictionary);
                let player = match seed {
                    Some(seed) => ComputerPlayer::with_seed(
                        spec.name.clone(),
                        dictionary,
                        skill,
                        seed.wrapping_add(seat as u64),
                    ),
                    None => ComputerPlayer::new(spec.name.clone(), dictionary, skill),
                };
                Box::new(player) as Box<dyn Player>
            }
        })
        .collect()
}
