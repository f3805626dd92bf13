#![warn(clippy::all)]

//! Quake Map - an interactive map of recent earthquakes.
//!
//! Fetches the USGS weekly earthquake feed and the PB2002 tectonic plate
//! boundaries, then draws each earthquake as a circle sized by magnitude
//! and coloured by depth over a selectable background tile layer.

mod config;
mod geo;
mod map;
mod net;
mod quake;
mod state;
mod ui;

use config::MapConfig;
use eframe::egui;
use geo::BaseMaps;
use net::HttpClient;
use quake::{build_legend, FeedChannel, Legend};
use state::AppState;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = native_config();
    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Quake Map",
        native_options,
        Box::new(|cc| Ok(Box::new(QuakeMapApp::new(cc, config)))),
    )
}

/// Reads the configuration named on the command line.
///
/// `--single-layer` selects the earthquakes-only map and `--print-config`
/// prints the default config as JSON. Any other argument is a path to a
/// JSON config file. Problems fall back to the defaults.
#[cfg(not(target_arch = "wasm32"))]
fn native_config() -> MapConfig {
    let Some(arg) = std::env::args().nth(1) else {
        return MapConfig::default();
    };

    match arg.as_str() {
        "--single-layer" => return MapConfig::single_layer(),
        "--print-config" => {
            match MapConfig::default().to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Could not serialize config: {}", e),
            }
            std::process::exit(0);
        }
        _ => {}
    }

    let loaded = std::fs::read_to_string(&arg)
        .map_err(|e| e.to_string())
        .and_then(|json| MapConfig::from_json(&json).map_err(|e| e.to_string()));

    match loaded {
        Ok(config) => {
            log::info!("Loaded config from {}", arg);
            config
        }
        Err(e) => {
            log::error!("Could not load config {}: {}; using defaults", arg, e);
            MapConfig::default()
        }
    }
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount the map in");
            return;
        };

        let canvas = match document
            .get_element_by_id("map")
            .map(|e| e.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("Element #map is missing or is not a canvas");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuakeMapApp::new(cc, MapConfig::default())))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The map has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct QuakeMapApp {
    /// Map configuration the app was started with
    config: MapConfig,

    /// Application state containing all sub-states
    state: AppState,

    /// Channel for the earthquake and plate feed fetches
    feeds: FeedChannel,

    /// Tile downloaders, one per base layer
    base_maps: BaseMaps,

    /// Depth legend, fixed for the session
    legend: Legend,

    /// Last time the view was written to the page URL
    last_url_push: web_time::Instant,
}

impl QuakeMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: MapConfig) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut state = AppState::new(&config);

        let url_params = state::url_state::parse_from_url();
        state.apply_url_params(&url_params, &config);

        let feeds = FeedChannel::new();
        match HttpClient::new() {
            Ok(client) => feeds.fetch_all(&cc.egui_ctx, &client, &config),
            Err(e) => {
                log::error!("Failed to create HTTP client: {}", e);
                state.status_message = "Network unavailable".to_string();
            }
        }

        let base_maps = BaseMaps::new(&config.base_layers, &cc.egui_ctx);

        let legend = build_legend(&config.legend_grades, &config.depth_bands);

        Self {
            config,
            state,
            feeds,
            base_maps,
            legend,
            last_url_push: web_time::Instant::now(),
        }
    }
}

impl eframe::App for QuakeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed feed fetches
        while let Some(result) = self.feeds.try_recv() {
            self.state.apply_feed_result(result);
        }

        // Push current view to URL (throttled to once per second)
        {
            let now = web_time::Instant::now();
            if now.duration_since(self.last_url_push).as_secs_f64() >= 1.0 {
                self.last_url_push = now;
                let center = self.state.view.center();
                state::url_state::push_to_url(
                    center.y(),
                    center.x(),
                    self.state.view.zoom(),
                    self.state.layer_state.base_layer,
                );
            }
        }

        // Panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.state, &self.config, self.feeds.is_loading());

        ui::render_canvas(
            ctx,
            &mut self.state,
            ui::CanvasContext {
                config: &self.config,
                base_maps: &mut self.base_maps,
            },
        );

        ui::render_layer_control(ctx, &mut self.state, &self.config);
        ui::render_legend(ctx, &self.legend);
    }
}
