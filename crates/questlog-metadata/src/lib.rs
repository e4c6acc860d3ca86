//! Game metadata catalog client for Questlog
//!
//! Searches an external metadata catalog (an IGDB-shaped API) and
//! converts the candidate records it returns into collection games for
//! auto-mode entry. The client never touches the stores; callers hand the
//! results to the session's search state themselves.

mod candidate;
mod client;

pub use candidate::{CoverImage, GameCandidate, NamedRef};
pub use client::CatalogClient;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
