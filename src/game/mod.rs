//! Game logic: dictionary, move validation, turn rotation, rounds

pub mod dictionary;
pub mod events;
pub mod state;
pub mod turn;
pub mod validation;

pub use dictionary::Dictionary;
pub use events::{GameEvent, Reporter, Standing};
pub use state::{GameState, RoundOutcome, MAX_LOSS_COUNT};
