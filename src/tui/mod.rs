//! Terminal UI components using ratatui

mod session;
mod ui;
mod view;

pub use session::{SharedSession, TuiHuman, TuiReporter, TuiSession};
pub use ui::render;
pub use view::{FeedEntry, FeedKind, TableView};
