//! Game collection state for Questlog
//!
//! Owns the in-memory game collection and keeps it mirrored to a
//! key-value snapshot after every mutation. Storage failures never cross
//! the store boundary; they are downgraded to entries in the two-channel
//! [`ErrorRegistry`] that callers poll.
//!
//! A [`Session`] wires the stores together for one application run; there
//! is no process-wide shared state.

mod config;
mod errors;
mod game;
mod games;
mod options;
mod search;
mod session;

pub use config::{Config, ConfigError, SearchConfig};
pub use errors::{ErrorChannel, ErrorRegistry};
pub use game::{Category, Game};
pub use games::{DUPLICATE_GAME, GAMES_KEY, GETTING_STORAGE, GameLibrary, UPDATING_STORAGE};
pub use options::{Mode, Options};
pub use search::SearchState;
pub use session::Session;
