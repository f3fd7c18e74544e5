//! Computer player
//!
//! Looks at which letters keep the fragment alive and picks one at random.
//! At `Skill::Normal` it also avoids letters that would spell a word.

use super::Player;
use crate::error::{GhostError, InvalidMove, Result};
use crate::game::dictionary::Dictionary;
use crate::game::validation::playable_letters;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// How carefully the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    /// Any letter that keeps the fragment viable
    Easy,
    /// Prefer letters that do not complete a word
    Normal,
}

/// A player that chooses letters from the dictionary.
pub struct ComputerPlayer {
    name: String,
    dictionary: Arc<Dictionary>,
    skill: Skill,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Create a computer player with a randomly seeded RNG.
    pub fn new(name: impl Into<String>, dictionary: Arc<Dictionary>, skill: Skill) -> Self {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(name, dictionary, skill, rng)
    }

    /// Create a computer player with a fixed seed (for testing/replays).
    pub fn with_seed(
        name: impl Into<String>,
        dictionary: Arc<Dictionary>,
        skill: Skill,
        seed: u64,
    ) -> Self {
        Self::with_rng(name, dictionary, skill, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, dictionary: Arc<Dictionary>, skill: Skill, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            dictionary,
            skill,
            rng,
        }
    }

    /// Pick a letter for `fragment`, or `None` if no letter keeps it viable.
    pub fn choose_letter(&mut self, fragment: &str) -> Option<char> {
        let playable = playable_letters(fragment, &self.dictionary);

        let safe: Vec<char> = match self.skill {
            Skill::Easy => Vec::new(),
            Skill::Normal => playable
                .iter()
                .copied()
                .filter(|&c| !self.dictionary.contains(&format!("{}{}", fragment, c)))
                .collect(),
        };

        let pool = if safe.is_empty() { &playable } else { &safe };
        pool.choose(&mut self.rng).copied()
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_letter(&mut self, fragment: &str) -> Result<String> {
        match self.choose_letter(fragment) {
            Some(letter) => {
                tracing::debug!(player = %self.name, fragment, %letter, "computer chose letter");
                Ok(letter.to_string())
            }
            None => Err(GhostError::NoLegalMove {
                player: self.name.clone(),
                fragment: fragment.to_string(),
            }),
        }
    }

    fn notify_invalid(&mut self, letter: &str, reason: &InvalidMove) {
        tracing::warn!(player = %self.name, letter, %reason, "computer letter rejected");
    }
}
