//! Terminal UI session shared by the reporter and human players
//!
//! The game engine talks to one `Reporter` and several `Player`s. In TUI
//! mode they all draw to the same screen, so they share a `TuiSession`.
//! The session holds the terminal only between `enter` and `exit`; outside
//! that window events still update the view but nothing is drawn.

use super::ui;
use super::view::TableView;
use crate::config::PauseConfig;
use crate::error::{GhostError, InvalidMove, Result};
use crate::game::{GameEvent, Reporter};
use crate::player::Player;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::cell::RefCell;
use std::io::{self, stdout, Stdout};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

pub type SharedSession = Rc<RefCell<TuiSession>>;

type Screen = Terminal<CrosstermBackend<Stdout>>;

/// The terminal plus what is on it.
pub struct TuiSession {
    /// Present while the session owns the terminal
    screen: Option<Screen>,
    view: TableView,
    pause: PauseConfig,
}

/// What a key press means at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    Letter(String),
    Quit,
    Ignore,
}

fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::Letter(c.to_string()),
        _ => KeyAction::Ignore,
    }
}

/// How long `event` stays on screen before play continues.
fn pause_after(pause: &PauseConfig, event: &GameEvent) -> Duration {
    match event {
        GameEvent::RoundStarted { .. } | GameEvent::RoundEnded { .. } => pause.standings(),
        GameEvent::WordCompleted { .. } | GameEvent::PlayerEliminated { .. } => pause.result(),
        _ => Duration::ZERO,
    }
}

/// Raw mode, alternate screen, hidden cursor.
fn take_over_terminal() -> io::Result<Screen> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
    let mut screen = Terminal::new(CrosstermBackend::new(stdout()))?;
    screen.clear()?;
    Ok(screen)
}

fn restore_terminal() -> io::Result<()> {
    execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

impl TuiSession {
    pub fn new(pause: PauseConfig) -> Self {
        Self {
            screen: None,
            view: TableView::new(),
            pause,
        }
    }

    pub fn shared(self) -> SharedSession {
        Rc::new(RefCell::new(self))
    }

    /// Take over the terminal and draw the current view.
    pub fn enter(&mut self) -> Result<()> {
        if self.screen.is_some() {
            return Ok(());
        }
        match take_over_terminal() {
            Ok(screen) => {
                self.screen = Some(screen);
                self.redraw()
            }
            Err(e) => {
                if let Err(restore) = restore_terminal() {
                    tracing::warn!(error = %restore, "failed to restore terminal");
                }
                Err(e.into())
            }
        }
    }

    /// Give the terminal back. Does nothing if it was never taken.
    pub fn exit(&mut self) -> Result<()> {
        if self.screen.take().is_some() {
            restore_terminal()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.screen.is_some()
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TableView {
        &mut self.view
    }

    pub fn redraw(&mut self) -> Result<()> {
        let view = &self.view;
        if let Some(screen) = self.screen.as_mut() {
            screen.draw(|frame| ui::render(frame, view))?;
        }
        Ok(())
    }

    /// Block until any key is pressed.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                Event::Resize(..) => self.redraw()?,
                _ => {}
            }
        }
    }

    /// Block until a key that means something at the prompt.
    fn read_letter(&mut self, player: &str) -> Result<String> {
        loop {
            match event::read()? {
                Event::Key(key) => match key_action(&key) {
                    KeyAction::Letter(letter) => return Ok(letter),
                    KeyAction::Quit => {
                        return Err(GhostError::Aborted {
                            player: player.to_string(),
                        })
                    }
                    KeyAction::Ignore => {}
                },
                Event::Resize(..) => self.redraw()?,
                _ => {}
            }
        }
    }
}

/// Draws every event and holds results on screen for a moment.
pub struct TuiReporter {
    session: SharedSession,
}

impl TuiReporter {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

impl Reporter for TuiReporter {
    fn report(&mut self, event: &GameEvent) -> Result<()> {
        let mut session = self.session.borrow_mut();
        session.view.apply(event);
        session.redraw()?;

        let pause = pause_after(&session.pause, event);
        if !pause.is_zero() {
            thread::sleep(pause);
        }
        Ok(())
    }
}

/// A person at the keyboard; one key press is one letter.
pub struct TuiHuman {
    name: String,
    session: SharedSession,
}

impl TuiHuman {
    pub fn new(name: impl Into<String>, session: SharedSession) -> Self {
        Self {
            name: name.into(),
            session,
        }
    }
}

impl Player for TuiHuman {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_letter(&mut self, fragment: &str) -> Result<String> {
        let mut session = self.session.borrow_mut();
        session.view.set_prompt(&self.name, fragment);
        session.redraw()?;

        let letter = session.read_letter(&self.name);
        session.view.clear_prompt();
        letter
    }

    fn notify_invalid(&mut self, letter: &str, reason: &InvalidMove) {
        self.session
            .borrow_mut()
            .view
            .set_feedback(format!("Can't play {:?}: {}. Try again.", letter, reason));
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
