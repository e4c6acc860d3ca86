//! Catalog candidate records and their conversion into collection games

use chrono::DateTime;
use questlog_library::{Category, Game};
use serde::{Deserialize, Serialize};

/// An `{id, name}` reference, as the catalog returns genres and platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Cover image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub id: i64,
    pub url: String,
}

/// One candidate record from a catalog search.
///
/// Everything except the name is optional; the catalog simply omits
/// fields it has no data for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameCandidate {
    pub name: String,
    pub summary: Option<String>,
    /// Release date as Unix seconds
    pub first_release_date: Option<i64>,
    pub genres: Option<Vec<NamedRef>>,
    pub platforms: Option<Vec<NamedRef>>,
    /// User score, 0-100
    pub rating: Option<f32>,
    /// Critic score, 0-100
    pub aggregated_rating: Option<f32>,
    pub cover: Option<CoverImage>,
}

impl GameCandidate {
    /// Convert into a collection game filed under `category`.
    ///
    /// The release timestamp is rendered as `YYYY-MM-DD`, reference lists
    /// flatten to their names, missing ratings become 0, and the cover
    /// URL is upgraded from the catalog's protocol-relative thumbnail
    /// form. Catalog imports are never manual entries.
    pub fn into_game(self, category: Category) -> Game {
        let release_date = self
            .first_release_date
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let cover_url = self
            .cover
            .map(|cover| expand_cover_url(&cover.url))
            .unwrap_or_default();

        Game {
            title: self.name,
            release_date,
            genres: names(self.genres),
            platforms: names(self.platforms),
            summary: self.summary.unwrap_or_default(),
            user_rating: self.rating.unwrap_or(0.0),
            critic_rating: self.aggregated_rating.unwrap_or(0.0),
            cover_url,
            category,
            manual_entry: false,
        }
    }
}

fn names(refs: Option<Vec<NamedRef>>) -> Vec<String> {
    refs.unwrap_or_default()
        .into_iter()
        .map(|named| named.name)
        .collect()
}

/// Covers arrive protocol-relative and thumbnail-sized, e.g.
/// `//images.example.com/t_thumb/co1rba.jpg`.
fn expand_cover_url(url: &str) -> String {
    let url = url.replace("t_thumb", "t_cover_big");

    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url,
    }
}
