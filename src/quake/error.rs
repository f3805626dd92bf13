//! Error types for the earthquake and plate feeds.

use crate::net::FetchError;
use thiserror::Error;

/// Errors produced while fetching or reading a feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("feed is not UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("expected a feature collection, got a bare geometry")]
    UnexpectedDocument,
}
