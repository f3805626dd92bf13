//! UI modules for the earthquake map.
//!
//! The UI is split into distinct pieces:
//! - Top bar: title, feed status and counts
//! - Central canvas: tiles, plate boundaries, earthquake markers and popup
//! - Layer control: base layer and overlay toggles, top right of the map
//! - Legend: depth colour key, bottom right of the map

mod canvas;
pub mod colors;
mod layer_control;
mod legend;
mod popup;
mod top_bar;

pub use canvas::{render_canvas, CanvasContext};
pub use layer_control::render_layer_control;
pub use legend::render_legend;
pub use top_bar::render_top_bar;
