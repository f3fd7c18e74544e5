//! Plain line-by-line display for `--plain`

use crate::config::PauseConfig;
use crate::error::Result;
use crate::game::{GameEvent, Reporter, Standing};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Prints game events as plain text.
pub struct ConsoleReporter<W> {
    out: W,
    clear_screen: bool,
    pause: PauseConfig,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, clear_screen: bool, pause: PauseConfig) -> Self {
        Self {
            out,
            clear_screen,
            pause,
        }
    }

    /// The underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn standings(&mut self, standings: &[Standing]) -> Result<()> {
        writeln!(self.out, "Current Standing:")?;
        for standing in standings {
            writeln!(self.out, "{}: {}", standing.name, standing.record())?;
        }
        self.out.flush()?;
        sleep(self.pause.standings());
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &GameEvent) -> Result<()> {
        match event {
            GameEvent::RoundStarted { standings, .. } => {
                self.clear()?;
                writeln!(self.out, "Let's play a round of Ghost!")?;
                self.standings(standings)?;
            }
            GameEvent::TurnStarted { player, .. } => {
                self.clear()?;
                writeln!(self.out, "It's {}'s turn!", player)?;
            }
            // the player has already been told
            GameEvent::LetterRejected { .. } => {}
            GameEvent::LetterAdded { player, letter, .. } => {
                writeln!(self.out, "{} added the letter '{}' to the fragment.", player, letter)?;
            }
            GameEvent::WordCompleted { player, word, .. } => {
                self.clear()?;
                writeln!(self.out, "{} spelled {}.", player, word)?;
                writeln!(self.out, "{} gets a letter!", player)?;
                self.out.flush()?;
                sleep(self.pause.result());
            }
            GameEvent::PlayerEliminated { player } => {
                writeln!(self.out, "{} has been eliminated!", player)?;
                self.out.flush()?;
                sleep(self.pause.result());
            }
            GameEvent::RoundEnded { standings, .. } => {
                self.standings(standings)?;
            }
            GameEvent::GameWon { winner } => {
                writeln!(self.out, "{} wins!", winner)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn sleep(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
