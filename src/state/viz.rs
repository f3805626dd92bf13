//! Map view state (center and zoom).

use crate::config::{MapConfig, MIN_ZOOM};
use walkers::{lon_lat, MapMemory, Position};

/// Where the map is looking.
///
/// The center and zoom live in the walkers `MapMemory`, which the map
/// widget updates as the user pans and zooms. Until the view is moved the
/// map sits on `home`.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub memory: MapMemory,

    /// Initial center, returned to on reset
    pub home: Position,

    /// Initial zoom level, returned to on reset
    home_zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

impl ViewState {
    /// The initial view of a configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        let mut view = Self {
            memory: MapMemory::default(),
            home: lon_lat(config.center_lon, config.center_lat),
            home_zoom: config.zoom,
        };
        view.set_zoom(config.zoom, config.max_zoom);
        view
    }

    /// Current center.
    pub fn center(&self) -> Position {
        self.memory.detached().unwrap_or(self.home)
    }

    pub fn zoom(&self) -> f64 {
        self.memory.zoom()
    }

    pub fn center_on(&mut self, lat: f64, lon: f64) {
        self.memory.center_at(lon_lat(lon, lat));
    }

    /// Sets the zoom level, clamped to `[MIN_ZOOM, max_zoom]`.
    pub fn set_zoom(&mut self, zoom: f64, max_zoom: f64) {
        let zoom = zoom.clamp(MIN_ZOOM, max_zoom.max(MIN_ZOOM));
        if let Err(e) = self.memory.set_zoom(zoom) {
            log::warn!("Zoom {} rejected: {}", zoom, e);
        }
    }

    /// Pulls the zoom back inside `[MIN_ZOOM, max_zoom]` after the map
    /// widget has applied a gesture.
    pub fn clamp_zoom(&mut self, max_zoom: f64) {
        let zoom = self.zoom();
        if zoom < MIN_ZOOM || zoom > max_zoom {
            self.set_zoom(zoom, max_zoom);
        }
    }

    /// Returns to the initial center and zoom.
    pub fn reset(&mut self, max_zoom: f64) {
        self.memory.follow_my_position();
        self.set_zoom(self.home_zoom, max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let view = ViewState::default();
        assert_eq!(view.center().y(), 37.09);
        assert_eq!(view.center().x(), -95.71);
        assert_eq!(view.zoom(), 5.0);
    }

    #[test]
    fn test_reset_returns_home() {
        let config = MapConfig::default();
        let mut view = ViewState::from_config(&config);
        view.center_on(10.0, 20.0);
        view.set_zoom(7.5, config.max_zoom);

        view.reset(config.max_zoom);
        assert_eq!(view.center(), lon_lat(-95.71, 37.09));
        assert_eq!(view.zoom(), 5.0);
    }

    #[test]
    fn test_clamp_zoom() {
        let mut view = ViewState::default();
        view.memory.set_zoom(12.0).expect("valid zoom");
        view.clamp_zoom(8.0);
        assert_eq!(view.zoom(), 8.0);

        view.memory.set_zoom(0.25).expect("valid zoom");
        view.clamp_zoom(8.0);
        assert_eq!(view.zoom(), MIN_ZOOM);
    }
}
