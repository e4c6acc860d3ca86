//! Catalog search state

use crate::game::Game;

/// The last catalog search and its results.
///
/// `results` is `None` until a search has run; `Some` with an empty list
/// means a search ran and matched nothing. The state only stores what the
/// catalog client hands it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub last_input: String,
    pub results: Option<Vec<Game>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed search, replacing any previous one.
    pub fn record(&mut self, input: impl Into<String>, results: Vec<Game>) {
        self.last_input = input.into();
        self.results = Some(results);
    }

    /// Forget the last search.
    pub fn clear(&mut self) {
        self.last_input.clear();
        self.results = None;
    }

    /// Whether any search has run this session.
    pub fn has_searched(&self) -> bool {
        self.results.is_some()
    }
}
