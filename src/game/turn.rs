//! Turn rotation over a fixed seating
//!
//! Seats never move and eliminated players are never removed; rotation
//! just steps the current index past them. The caller supplies the
//! elimination test so the loss table stays the single source of truth.

/// Index of the seat whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    current: usize,
    seats: usize,
}

impl TurnOrder {
    /// Start at seat 0 of `seats` seats.
    pub fn new(seats: usize) -> Self {
        assert!(seats > 0, "Must have at least 1 seat");
        Self { current: 0, seats }
    }

    /// The current seat.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of seats.
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Move to the next seat, then keep moving while that seat is eliminated.
    ///
    /// Gives up after a full lap so a table with nobody left cannot spin
    /// forever; the game never advances in that state.
    pub fn advance(&mut self, is_eliminated: impl Fn(usize) -> bool) {
        for _ in 0..self.seats {
            self.current = (self.current + 1) % self.seats;
            if !is_eliminated(self.current) {
                return;
            }
        }
    }

    /// The nearest non-eliminated seat before the current one, wrapping.
    ///
    /// Right after `advance`, this is the seat that just played. The current
    /// seat itself is checked last; if every seat is eliminated the current
    /// seat is returned.
    pub fn previous(&self, is_eliminated: impl Fn(usize) -> bool) -> usize {
        (1..=self.seats)
            .map(|back| (self.current + self.seats - back) % self.seats)
            .find(|&seat| !is_eliminated(seat))
            .unwrap_or(self.current)
    }
}
