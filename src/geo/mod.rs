//! Geographic layer system for the map.
//!
//! This module provides the background tile sources, vector layers parsed
//! from GeoJSON, and the walkers plugin that draws them above the tiles.

mod layer;
mod renderer;
mod tiles;

pub use layer::GeoLayer;
pub use renderer::{to_screen, SceneLayer};
pub use tiles::{BaseMaps, Credit, TileSource};
