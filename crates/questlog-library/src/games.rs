//! Game collection store with write-through persistence

use crate::errors::{ErrorChannel, ErrorRegistry};
use crate::game::{Category, Game};
use questlog_storage::KeyValueStore;

/// Storage key holding the serialized collection.
pub const GAMES_KEY: &str = "games";

/// Registered when the persisted snapshot cannot be read or parsed.
pub const GETTING_STORAGE: &str = "gettingStorage";

/// Registered when writing the snapshot back fails.
pub const UPDATING_STORAGE: &str = "updatingStorage";

/// Registered when an add is rejected because the title already exists.
pub const DUPLICATE_GAME: &str = "duplicateGame";

/// The authoritative in-memory game collection.
///
/// Every structural mutation is followed by a synchronous write-back of
/// the whole collection to the storage backend. Storage failures are
/// swallowed and reported on the internal error channel; the in-memory
/// collection stays the source of truth either way.
pub struct GameLibrary {
    storage: Box<dyn KeyValueStore>,
    errors: ErrorRegistry,
    games: Vec<Game>,
    selected: Option<Game>,
}

impl GameLibrary {
    /// Open the collection, loading any persisted snapshot.
    ///
    /// A missing snapshot is an empty collection. A snapshot that cannot
    /// be read or parsed also yields an empty collection and registers
    /// [`GETTING_STORAGE`]; open itself never fails.
    pub fn open(storage: Box<dyn KeyValueStore>, errors: ErrorRegistry) -> Self {
        let games = match storage.get(GAMES_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(games) => games,
                Err(err) => {
                    tracing::error!("Failed to parse stored games: {err}");
                    errors.add(ErrorChannel::Internal, GETTING_STORAGE);
                    Vec::new()
                }
            },
            Err(err) => {
                tracing::error!("Failed to read games from storage: {err}");
                errors.add(ErrorChannel::Internal, GETTING_STORAGE);
                Vec::new()
            }
        };

        Self {
            storage,
            errors,
            games,
            selected: None,
        }
    }

    /// All games, in insertion order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Whether no stored game already uses this game's title.
    ///
    /// Titles compare case-sensitively.
    pub fn is_new_game(&self, game: &Game) -> bool {
        !self.games.iter().any(|stored| stored.title == game.title)
    }

    /// Add a game to the collection.
    ///
    /// A game whose title is already present is rejected: user error
    /// [`DUPLICATE_GAME`] is registered and the collection is unchanged.
    /// Returns whether the game was inserted.
    pub fn add_game(&mut self, game: Game) -> bool {
        if !self.is_new_game(&game) {
            tracing::warn!("Game already exists: {}", game.title);
            self.errors.add(ErrorChannel::User, DUPLICATE_GAME);
            return false;
        }

        self.games.push(game);
        self.persist();
        true
    }

    /// Remove the game with this exact title. No-op if absent.
    pub fn remove_game(&mut self, title: &str) {
        if let Some(index) = self.games.iter().position(|game| game.title == title) {
            self.games.remove(index);
            self.persist();
        }
    }

    /// Empty the collection.
    pub fn remove_all_games(&mut self) {
        self.games.clear();
        self.persist();
    }

    /// Mark a game as currently viewed.
    pub fn select_game(&mut self, game: Game) {
        self.selected = Some(game);
    }

    /// Clear the current selection.
    pub fn deselect_game(&mut self) {
        self.selected = None;
    }

    pub fn selected_game(&self) -> Option<&Game> {
        self.selected.as_ref()
    }

    /// Games filed under `category`, in insertion order.
    ///
    /// Recomputed on every call so the view is never stale relative to
    /// the last mutation.
    pub fn games_by_category(&self, category: Category) -> Vec<Game> {
        self.games
            .iter()
            .filter(|game| game.category == category)
            .cloned()
            .collect()
    }

    pub fn backlog_games(&self) -> Vec<Game> {
        self.games_by_category(Category::Backlog)
    }

    pub fn completed_games(&self) -> Vec<Game> {
        self.games_by_category(Category::Completed)
    }

    pub fn wishlist_games(&self) -> Vec<Game> {
        self.games_by_category(Category::Wishlist)
    }

    /// Write the collection back to storage.
    ///
    /// Runs synchronously after each completed mutation, so the snapshot
    /// always reflects post-mutation state. Failures are downgraded to
    /// [`UPDATING_STORAGE`] on the internal channel.
    fn persist(&mut self) {
        let text = match serde_json::to_string(&self.games) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Failed to serialize games: {err}");
                self.errors.add(ErrorChannel::Internal, UPDATING_STORAGE);
                return;
            }
        };

        if let Err(err) = self.storage.set(GAMES_KEY, &text) {
            tracing::error!("Failed to store games: {err}");
            self.errors.add(ErrorChannel::Internal, UPDATING_STORAGE);
        }
    }
}
