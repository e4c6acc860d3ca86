//! Session context owning the application stores

use crate::config::Config;
use crate::errors::ErrorRegistry;
use crate::games::GameLibrary;
use crate::options::Options;
use crate::search::SearchState;
use questlog_storage::{FileStore, KeyValueStore};

/// Explicit context object owning every store for one application run.
///
/// Construction is the only place the stores get wired together: the
/// collection store reports through the same registry handle the UI
/// queries. Nothing here is global; drop the session and the state is
/// gone.
pub struct Session {
    pub errors: ErrorRegistry,
    pub games: GameLibrary,
    pub options: Options,
    pub search: SearchState,
}

impl Session {
    /// Build a session over an explicit storage backend.
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        let errors = ErrorRegistry::new();
        let games = GameLibrary::open(storage, errors.clone());

        Self {
            errors,
            games,
            options: Options::default(),
            search: SearchState::new(),
        }
    }

    /// Build a file-backed session from configuration.
    pub fn open(config: &Config) -> Self {
        let mut session = Self::new(Box::new(FileStore::new(&config.data_dir)));
        session.options.selected_mode = config.default_mode;
        session
    }
}
