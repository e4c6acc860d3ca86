//! User-selected entry options

use crate::game::Category;
use serde::{Deserialize, Serialize};

/// How new games are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fields populated from catalog search results
    #[default]
    Auto,
    /// All fields typed by hand
    Manual,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
        }
    }
}

/// Session-scoped user selections.
///
/// Plain state with no derived behavior; the UI reads and writes the
/// fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub selected_mode: Mode,
    /// Current category filter; `None` shows everything
    pub selected_category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();

        assert_eq!(options.selected_mode, Mode::Auto);
        assert!(options.selected_category.is_none());
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(Mode::Auto.as_str(), "auto");
        assert_eq!(Mode::Manual.as_str(), "manual");
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Auto).unwrap(), r#""auto""#);
        assert_eq!(serde_json::to_string(&Mode::Manual).unwrap(), r#""manual""#);
    }
}
