//! What the table screen shows
//!
//! `TableView` is plain data folded from `GameEvent`s plus whatever prompt a
//! human player has put up. Rendering never mutates it.

use crate::game::{GameEvent, Standing};
use std::collections::VecDeque;

/// Feed entries kept for display
pub const MAX_FEED: usize = 50;

/// How a feed line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Round,
    Letter,
    Rejected,
    Loss,
    Eliminated,
    Win,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub kind: FeedKind,
    pub text: String,
}

/// State of the table screen.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub round: u32,
    pub fragment: String,
    pub standings: Vec<Standing>,
    /// Oldest first
    pub feed: VecDeque<FeedEntry>,
    /// Player whose turn it is
    pub active: Option<String>,
    /// Question shown to a human player
    pub prompt: Option<String>,
    /// Why the last letter was refused
    pub feedback: String,
    pub winner: Option<String>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the view.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round, standings } => {
                self.round = *round;
                self.fragment.clear();
                self.standings = standings.clone();
                self.feedback.clear();
                self.push(FeedKind::Round, format!("Round {}", round));
            }
            GameEvent::TurnStarted { player, fragment } => {
                self.active = Some(player.clone());
                self.fragment = fragment.clone();
            }
            GameEvent::LetterRejected {
                player,
                letter,
                reason,
            } => {
                self.push(FeedKind::Rejected, format!("{} tried {:?}: {}", player, letter, reason));
            }
            GameEvent::LetterAdded {
                player,
                letter,
                fragment,
            } => {
                self.fragment = fragment.clone();
                self.feedback.clear();
                self.push(FeedKind::Letter, format!("{} added '{}'", player, letter));
            }
            GameEvent::WordCompleted { player, word, .. } => {
                self.fragment = word.clone();
                self.push(FeedKind::Loss, format!("{} spelled {} and gets a letter!", player, word));
            }
            GameEvent::PlayerEliminated { player } => {
                self.push(FeedKind::Eliminated, format!("{} has been eliminated!", player));
            }
            GameEvent::RoundEnded { standings, .. } => {
                self.standings = standings.clone();
                self.active = None;
            }
            GameEvent::GameWon { winner } => {
                self.winner = Some(winner.clone());
                self.active = None;
                self.push(FeedKind::Win, format!("{} wins!", winner));
            }
        }
    }

    /// Ask `player` for a letter.
    pub fn set_prompt(&mut self, player: &str, fragment: &str) {
        self.prompt = Some(format!("{}, add a letter to \"{}\"", player, fragment));
    }

    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    fn push(&mut self, kind: FeedKind, text: String) {
        if self.feed.len() == MAX_FEED {
            self.feed.pop_front();
        }
        self.feed.push_back(FeedEntry { kind, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidMove;

    fn standing(name: &str, losses: u32) -> Standing {
        Standing {
            name: name.to_string(),
            losses,
            eliminated: losses >= 5,
        }
    }

    #[test]
    fn test_round_flow_updates_fragment_and_standings() {
        let mut view = TableView::new();
        view.apply(&GameEvent::RoundStarted {
            round: 2,
            standings: vec![standing("Ann", 0), standing("Bob", 1)],
        });
        view.apply(&GameEvent::TurnStarted {
            player: "Ann".to_string(),
            fragment: String::new(),
        });
        assert_eq!(view.active.as_deref(), Some("Ann"));

        view.apply(&GameEvent::LetterAdded {
            player: "Ann".to_string(),
            letter: 'c',
            fragment: "c".to_string(),
        });
        assert_eq!(view.fragment, "c");

        view.apply(&GameEvent::RoundEnded {
            round: 2,
            standings: vec![standing("Ann", 1), standing("Bob", 1)],
        });
        assert_eq!(view.round, 2);
        assert_eq!(view.standings[0].losses, 1);
        assert_eq!(view.active, None);

        let feed: Vec<_> = view.feed.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(feed, vec!["Round 2", "Ann added 'c'"]);
    }

    #[test]
    fn test_rejection_is_fed_and_cleared_by_next_letter() {
        let mut view = TableView::new();
        view.set_feedback("Can't play \"x\"");
        view.apply(&GameEvent::LetterRejected {
            player: "Ann".to_string(),
            letter: "x".to_string(),
            reason: InvalidMove::DeadEnd("cax".to_string()),
        });
        assert_eq!(view.feed.back().map(|e| e.kind), Some(FeedKind::Rejected));
        assert!(!view.feedback.is_empty());

        view.apply(&GameEvent::LetterAdded {
            player: "Ann".to_string(),
            letter: 't',
            fragment: "cat".to_string(),
        });
        assert!(view.feedback.is_empty());
    }

    #[test]
    fn test_feed_is_bounded() {
        let mut view = TableView::new();
        for i in 0..(MAX_FEED as u32 + 10) {
            view.apply(&GameEvent::RoundStarted {
                round: i,
                standings: Vec::new(),
            });
        }
        assert_eq!(view.feed.len(), MAX_FEED);
        assert_eq!(view.feed.front().map(|e| e.text.as_str()), Some("Round 10"));
    }

    #[test]
    fn test_game_won() {
        let mut view = TableView::new();
        view.active = Some("Ann".to_string());
        view.apply(&GameEvent::GameWon {
            winner: "Ann".to_string(),
        });
        assert_eq!(view.winner.as_deref(), Some("Ann"));
        assert_eq!(view.active, None);
    }

    #[test]
    fn test_prompt() {
        let mut view = TableView::new();
        view.set_prompt("Ann", "ca");
        assert_eq!(view.prompt.as_deref(), Some("Ann, add a letter to \"ca\""));
        view.clear_prompt();
        assert_eq!(view.prompt, None);
    }
}
