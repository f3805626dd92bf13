//! Application state management.
//!
//! State is organized into logical groupings: what the map is looking at,
//! which layers are on, and the data loaded from the feeds.

mod layer;
pub mod url_state;
mod viz;

pub use layer::LayerState;
pub use url_state::UrlParams;
pub use viz::ViewState;

use crate::config::MapConfig;
use crate::geo::GeoLayer;
use crate::quake::{EarthquakeFeature, FeedKind, FeedResult};

/// Root application state containing all sub-states.
#[derive(Debug, Default)]
pub struct AppState {
    /// Map center and zoom
    pub view: ViewState,

    /// Layer visibility toggles and base layer selection
    pub layer_state: LayerState,

    /// Earthquakes from the last successful feed fetch
    pub earthquakes: Vec<EarthquakeFeature>,

    /// Plate boundaries, once loaded
    pub plates: Option<GeoLayer>,

    /// Earthquake whose popup is open
    pub selected_quake: Option<usize>,

    /// Feeds that failed to load
    pub failed_feeds: Vec<FeedKind>,

    /// Application status message displayed in top bar
    pub status_message: String,
}

impl AppState {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            view: ViewState::from_config(config),
            status_message: "Loading feeds...".to_string(),
            ..Default::default()
        }
    }

    /// Applies view overrides taken from the page URL.
    pub fn apply_url_params(&mut self, params: &UrlParams, config: &MapConfig) {
        if let (Some(lat), Some(lon)) = (params.lat, params.lon) {
            self.view
                .center_on(lat.clamp(-85.0, 85.0), lon.clamp(-180.0, 180.0));
        }
        if let Some(zoom) = params.zoom {
            self.view.set_zoom(zoom, config.max_zoom);
        }
        if let Some(base) = params.base {
            self.layer_state
                .select_base_layer(base, config.base_layers.len());
        }
    }

    /// Stores a completed feed fetch.
    ///
    /// A failed feed leaves the other one untouched; the map keeps working
    /// with whatever did load.
    pub fn apply_feed_result(&mut self, result: FeedResult) {
        match result {
            FeedResult::Earthquakes(quakes) => {
                log::info!("Loaded {} earthquakes", quakes.len());
                self.earthquakes = quakes;
                self.selected_quake = None;
                self.status_message = format!("{} earthquakes", self.earthquakes.len());
            }
            FeedResult::Plates(layer) => {
                log::info!("Loaded {} lines of {}", layer.line_count(), layer.name);
                self.plates = Some(layer);
            }
            FeedResult::Error { feed, error } => {
                log::error!("Failed to load {}: {}", feed.label(), error);
                self.status_message = format!("Failed to load {}", feed.label());
                if !self.failed_feeds.contains(&feed) {
                    self.failed_feeds.push(feed);
                }
            }
        }
    }

    /// The earthquake whose popup is open, if it still exists.
    pub fn selected(&self) -> Option<&EarthquakeFeature> {
        self.selected_quake.and_then(|i| self.earthquakes.get(i))
    }
}
