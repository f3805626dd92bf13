//! Earthquake data and its visual mapping.
//!
//! This module provides functionality for:
//! - Fetching the earthquake and plate boundary feeds
//! - Reading earthquake records out of GeoJSON
//! - Deriving marker styles, popups and the depth legend

mod error;
mod feature;
mod feed;
mod legend;
mod popup;
mod style;

pub use error::FeedError;
pub use feature::EarthquakeFeature;
pub use feed::{FeedChannel, FeedKind, FeedResult};
pub use legend::{build_legend, Legend};
pub use popup::PopupContent;
pub use style::{marker_style, plate_style, DepthBand, DepthBands, HexColor, LineStyle, MarkerStyle};
