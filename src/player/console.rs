//! Line-based human player for plain terminal mode

use super::Player;
use crate::error::{GhostError, InvalidMove, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Input shared by every human at the same keyboard.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// A person typing one letter per line.
///
/// Input is passed through trimmed but otherwise untouched, so "A" or "ab"
/// reach the engine and are refused there.
pub struct ConsoleHuman<R, W> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// The writer prompts go to
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Player for ConsoleHuman<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_letter(&mut self, fragment: &str) -> Result<String> {
        write!(self.output, "{}, add a letter to \"{}\": ", self.name, fragment)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Err(GhostError::InputClosed {
                player: self.name.clone(),
            });
        }

        Ok(line.trim().to_string())
    }

    fn notify_invalid(&mut self, letter: &str, reason: &InvalidMove) {
        let written: io::Result<()> = writeln!(self.output, "Can't play {:?}: {}. Try again.", letter, reason);
        if let Err(e) = written {
            tracing::warn!(player = %self.name, error = %e, "could not show invalid move");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_trimmed_line() {
        let input = Rc::new(RefCell::new(Cursor::new("  c \n")));
        let mut human = ConsoleHuman::new("Ann", input, Vec::new());

        assert_eq!(human.request_letter("").unwrap(), "c");
        let prompt = String::from_utf8(human.output().clone()).unwrap();
        assert_eq!(prompt, "Ann, add a letter to \"\": ");
    }

    #[test]
    fn test_does_not_normalize_case() {
        let input = Rc::new(RefCell::new(Cursor::new("T\n")));
        let mut human = ConsoleHuman::new("Ann", input, Vec::new());
        assert_eq!(human.request_letter("ca").unwrap(), "T");
    }

    #[test]
    fn test_shared_input_alternates_between_players() {
        let input = Rc::new(RefCell::new(Cursor::new("c\na\n")));
        let mut ann = ConsoleHuman::new("Ann", Rc::clone(&input), Vec::new());
        let mut bob = ConsoleHuman::new("Bob", input, Vec::new());

        assert_eq!(ann.request_letter("").unwrap(), "c");
        assert_eq!(bob.request_letter("c").unwrap(), "a");
    }

    #[test]
    fn test_end_of_input() {
        let input = Rc::new(RefCell::new(Cursor::new("")));
        let mut human = ConsoleHuman::new("Ann", input, Vec::new());

        match human.request_letter("") {
            Err(GhostError::InputClosed { player }) => assert_eq!(player, "Ann"),
            other => panic!("Expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_notify_invalid_writes_reason() {
        let input = Rc::new(RefCell::new(Cursor::new("")));
        let mut human = ConsoleHuman::new("Ann", input, Vec::new());

        human.notify_invalid("x", &InvalidMove::DeadEnd("cax".to_string()));
        let text = String::from_utf8(human.output().clone()).unwrap();
        assert_eq!(text, "Can't play \"x\": no word starts with \"cax\". Try again.\n");
    }
}
