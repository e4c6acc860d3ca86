//! Game records and categories

use serde::{Deserialize, Serialize};

/// Shelf a game is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Backlog,
    Completed,
    Wishlist,
}

impl Category {
    /// Every category, in shelf order.
    pub const ALL: [Category; 3] = [Category::Backlog, Category::Completed, Category::Wishlist];

    /// Category as a route/path component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Backlog => "backlog",
            Category::Completed => "completed",
            Category::Wishlist => "wishlist",
        }
    }

    /// Parse a route/path component back into a category.
    pub fn from_route(route: &str) -> Option<Category> {
        match route {
            "backlog" => Some(Category::Backlog),
            "completed" => Some(Category::Completed),
            "wishlist" => Some(Category::Wishlist),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game in the collection.
///
/// `title` doubles as the collection key; [`crate::GameLibrary`] keeps
/// titles unique. Field names on the wire stay camelCase to match the
/// persisted snapshot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub title: String,
    /// Free-form; catalog imports render it as `YYYY-MM-DD`
    pub release_date: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub summary: String,
    pub user_rating: f32,
    pub critic_rating: f32,
    pub cover_url: String,
    pub category: Category,
    /// True when typed by hand rather than imported from the catalog
    pub manual_entry: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game {
            title: "Hollow Knight".to_string(),
            release_date: "2017-02-24".to_string(),
            genres: vec!["Platform".to_string(), "Adventure".to_string()],
            platforms: vec!["PC".to_string()],
            summary: "A challenging action adventure.".to_string(),
            user_rating: 92.0,
            critic_rating: 90.0,
            cover_url: "https://images.example.com/hollow-knight.jpg".to_string(),
            category: Category::Backlog,
            manual_entry: false,
        }
    }

    #[test]
    fn test_category_route_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_route(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_route("favorites"), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Backlog.to_string(), "backlog");
        assert_eq!(Category::Completed.to_string(), "completed");
        assert_eq!(Category::Wishlist.to_string(), "wishlist");
    }

    #[test]
    fn test_game_wire_format_is_camel_case() {
        let json = serde_json::to_string(&sample_game()).unwrap();

        assert!(json.contains(r#""releaseDate":"2017-02-24""#));
        assert!(json.contains(r#""userRating":92.0"#));
        assert!(json.contains(r#""criticRating":90.0"#));
        assert!(json.contains(r#""coverUrl""#));
        assert!(json.contains(r#""manualEntry":false"#));
        assert!(json.contains(r#""category":"backlog""#));
    }

    #[test]
    fn test_game_round_trips_through_json() {
        let game = sample_game();
        let json = serde_json::to_string(&game).unwrap();
        let parsed: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, game);
    }
}
