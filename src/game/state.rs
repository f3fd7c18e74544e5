//! Game state and the round engine
//!
//! `GameState` owns the fragment, the seating and the loss table. A round
//! asks the current player for letters until the fragment spells a word,
//! then charges that player a loss. The game ends when one player is left
//! with fewer than `MAX_LOSS_COUNT` losses.

use super::dictionary::Dictionary;
use super::events::{GameEvent, Reporter, Standing};
use super::turn::TurnOrder;
use super::validation::validate_letter;
use crate::error::{InvalidMove, Result, SetupError};
use crate::player::Player;
use std::collections::HashMap;
use std::sync::Arc;

/// Losses that eliminate a player (one per letter of GHOST)
pub const MAX_LOSS_COUNT: u32 = 5;

/// What happened at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The completed word
    pub word: String,
    /// The player who spelled it
    pub loser: String,
    /// The loser's loss count after this round
    pub losses: u32,
    /// Whether this round eliminated the loser
    pub eliminated: bool,
}

/// Mutable state of one game of Ghost.
pub struct GameState {
    /// Letters played so far this round
    fragment: String,
    /// Seating order; never changes after construction
    players: Vec<Box<dyn Player>>,
    /// Losses per player name, every player present from the start
    losses: HashMap<String, u32>,
    /// Whose turn it is
    turns: TurnOrder,
    dictionary: Arc<Dictionary>,
    /// Rounds started so far
    round: u32,
}

impl GameState {
    /// Seat `players` in the given order.
    ///
    /// Fails if there are no players or two share a name.
    pub fn new(players: Vec<Box<dyn Player>>, dictionary: Arc<Dictionary>) -> Result<Self> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers.into());
        }

        let mut losses = HashMap::new();
        for player in &players {
            if losses.insert(player.name().to_string(), 0).is_some() {
                return Err(SetupError::DuplicatePlayer(player.name().to_string()).into());
            }
        }

        if dictionary.is_empty() {
            tracing::warn!("dictionary is empty; no round can finish");
        }

        Ok(Self {
            fragment: String::new(),
            turns: TurnOrder::new(players.len()),
            players,
            losses,
            dictionary,
            round: 0,
        })
    }

    /// Play rounds until one player remains. Returns the winner's name.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<String> {
        tracing::info!(players = self.players.len(), "game started");

        loop {
            if let Some(winner) = self.winner() {
                let winner = winner.to_string();
                tracing::info!(%winner, rounds = self.round, "game over");
                reporter.report(&GameEvent::GameWon {
                    winner: winner.clone(),
                })?;
                return Ok(winner);
            }
            self.play_round(reporter)?;
        }
    }

    /// Play exactly one round, from an empty fragment to a completed word.
    pub fn play_round(&mut self, reporter: &mut dyn Reporter) -> Result<RoundOutcome> {
        self.fragment.clear();
        self.round += 1;
        tracing::info!(round = self.round, "round started");
        reporter.report(&GameEvent::RoundStarted {
            round: self.round,
            standings: self.standings(),
        })?;

        while !self.is_round_over() {
            self.take_turn(reporter)?;
            self.next_player();
        }

        self.update_standings(reporter)
    }

    /// Ask the current player for letters until one is playable, then add it.
    fn take_turn(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        let seat = self.turns.current();
        let name = self.players[seat].name().to_string();
        reporter.report(&GameEvent::TurnStarted {
            player: name.clone(),
            fragment: self.fragment.clone(),
        })?;

        let letter = loop {
            let proposed = self.players[seat].request_letter(&self.fragment)?;
            match self.check_play(&proposed) {
                Ok(letter) => break letter,
                Err(reason) => {
                    tracing::debug!(player = %name, letter = %proposed, %reason, "letter rejected");
                    self.players[seat].notify_invalid(&proposed, &reason);
                    reporter.report(&GameEvent::LetterRejected {
                        player: name.clone(),
                        letter: proposed,
                        reason,
                    })?;
                }
            }
        };

        self.fragment.push(letter);
        tracing::debug!(player = %name, %letter, fragment = %self.fragment, "letter added");
        reporter.report(&GameEvent::LetterAdded {
            player: name,
            letter,
            fragment: self.fragment.clone(),
        })
    }

    /// Charge the player who completed the word.
    fn update_standings(&mut self, reporter: &mut dyn Reporter) -> Result<RoundOutcome> {
        let loser = self.previous_player().name().to_string();
        let losses = self.losses.entry(loser.clone()).or_insert(0);
        *losses += 1;
        let losses = *losses;
        let eliminated = losses == MAX_LOSS_COUNT;

        tracing::info!(player = %loser, word = %self.fragment, losses, eliminated, "word completed");
        reporter.report(&GameEvent::WordCompleted {
            player: loser.clone(),
            word: self.fragment.clone(),
            losses,
        })?;
        if eliminated {
            reporter.report(&GameEvent::PlayerEliminated {
                player: loser.clone(),
            })?;
        }
        reporter.report(&GameEvent::RoundEnded {
            round: self.round,
            standings: self.standings(),
        })?;

        Ok(RoundOutcome {
            word: self.fragment.clone(),
            loser,
            losses,
            eliminated,
        })
    }

    /// Check a proposed letter against the current fragment.
    pub fn check_play(&self, letter: &str) -> std::result::Result<char, InvalidMove> {
        validate_letter(&self.fragment, letter, &self.dictionary)
    }

    /// True iff `letter` is one lowercase letter that keeps the fragment viable.
    pub fn valid_play(&self, letter: &str) -> bool {
        self.check_play(letter).is_ok()
    }

    /// The fragment spells a dictionary word.
    pub fn is_round_over(&self) -> bool {
        self.dictionary.contains(&self.fragment)
    }

    /// Exactly one player is not eliminated.
    pub fn is_game_over(&self) -> bool {
        self.remaining_players() == 1
    }

    /// Number of players not yet eliminated.
    pub fn remaining_players(&self) -> usize {
        self.losses
            .values()
            .filter(|&&losses| losses < MAX_LOSS_COUNT)
            .count()
    }

    /// The last player standing, once the game is over.
    pub fn winner(&self) -> Option<&str> {
        if !self.is_game_over() {
            return None;
        }
        self.players
            .iter()
            .map(|p| p.name())
            .find(|name| !self.is_eliminated(name))
    }

    /// The player whose turn it is. Never an eliminated player.
    pub fn current_player(&self) -> &dyn Player {
        self.players[self.turns.current()].as_ref()
    }

    /// The nearest non-eliminated player seated before the current one,
    /// which after a rotation is the player who just moved.
    pub fn previous_player(&self) -> &dyn Player {
        let out = self.eliminated_seats();
        self.players[self.turns.previous(|seat| out[seat])].as_ref()
    }

    /// Pass the turn to the next non-eliminated player.
    pub fn next_player(&mut self) {
        let out = self.eliminated_seats();
        self.turns.advance(|seat| out[seat]);
    }

    /// Current standings in seating order.
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| {
                let losses = self.losses_for(p.name());
                Standing {
                    name: p.name().to_string(),
                    losses,
                    eliminated: losses >= MAX_LOSS_COUNT,
                }
            })
            .collect()
    }

    /// Loss count for a player, `None` for a name not at the table.
    pub fn losses(&self, name: &str) -> Option<u32> {
        self.losses.get(name).copied()
    }

    /// Letters played so far this round.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    fn losses_for(&self, name: &str) -> u32 {
        self.losses.get(name).copied().unwrap_or(0)
    }

    fn is_eliminated(&self, name: &str) -> bool {
        self.losses_for(name) >= MAX_LOSS_COUNT
    }

    fn eliminated_seats(&self) -> Vec<bool> {
        self.players
            .iter()
            .map(|p| self.is_eliminated(p.name()))
            .collect()
    }
}
