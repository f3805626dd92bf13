//! Background map tiles.
//!
//! A `TileSource` describes a slippy-map server the way it appears in the
//! config. Fetching, decoding and caching are left to `walkers::HttpTiles`;
//! `BaseMaps` keeps one of those per configured source.

use eframe::egui;
use serde::{Deserialize, Serialize};
use walkers::sources::{self, Attribution};
use walkers::{HttpTiles, TileId};

/// Who the tiles of a source must be credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credit {
    OpenStreetMap,
    Carto,
}

impl Credit {
    /// Credit line shown in the map corner.
    pub fn text(self) -> &'static str {
        match self {
            Credit::OpenStreetMap => "© OpenStreetMap contributors",
            Credit::Carto => "© OpenStreetMap contributors © CARTO",
        }
    }

    fn url(self) -> &'static str {
        match self {
            Credit::OpenStreetMap => "https://www.openstreetmap.org/copyright",
            Credit::Carto => "https://carto.com/attributions",
        }
    }
}

/// A background tile server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSource {
    /// Name shown in the layer control
    pub name: String,
    /// URL with `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders
    pub url_template: String,
    /// Values substituted for `{s}`, spread across tiles
    #[serde(default)]
    pub subdomains: Vec<String>,
    pub credit: Credit,
    /// Highest zoom level the server provides
    pub max_zoom: u8,
}

impl TileSource {
    /// Expands the URL template for a tile.
    ///
    /// `{s}` cycles through the subdomains by `(x + y) % n`; `{r}` (the
    /// retina suffix) is always empty.
    pub fn tile_url(&self, tile: TileId) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{r}", "")
    }
}

impl sources::TileSource for TileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        TileSource::tile_url(self, tile_id)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.credit.text(),
            url: self.credit.url(),
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

/// Tile downloaders and caches, one per configured base layer.
#[derive(Default)]
pub struct BaseMaps {
    layers: Vec<HttpTiles>,
}

impl BaseMaps {
    pub fn new(sources: &[TileSource], ctx: &egui::Context) -> Self {
        let layers = sources
            .iter()
            .map(|source| {
                log::debug!("Base layer {}: {}", source.name, source.url_template);
                HttpTiles::new(source.clone(), ctx.clone())
            })
            .collect();
        Self { layers }
    }

    /// Tiles of the base layer at `index`, if there is one.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut HttpTiles> {
        self.layers.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkers::sources::TileSource as _;

    fn carto() -> TileSource {
        TileSource {
            name: "Positron Map".to_string(),
            url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            subdomains: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            credit: Credit::Carto,
            max_zoom: 8,
        }
    }

    #[test]
    fn test_tile_url_expansion() {
        let url = carto().tile_url(TileId { x: 7, y: 12, zoom: 5 });
        // (7 + 12) % 4 = 3 -> "d"
        assert_eq!(url, "https://d.basemaps.cartocdn.com/light_all/5/7/12.png");
    }

    #[test]
    fn test_tile_url_without_subdomains() {
        let source = TileSource {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: Vec::new(),
            credit: Credit::OpenStreetMap,
            ..carto()
        };
        assert_eq!(
            source.tile_url(TileId { x: 1, y: 2, zoom: 3 }),
            "https://tile.openstreetmap.org/3/1/2.png"
        );
    }

    #[test]
    fn test_walkers_source_reports_limits_and_credit() {
        let source = carto();
        assert_eq!(sources::TileSource::max_zoom(&source), 8);
        assert_eq!(source.attribution().text, "© OpenStreetMap contributors © CARTO");
        assert_eq!(
            sources::TileSource::tile_url(&source, TileId { x: 0, y: 1, zoom: 1 }),
            "https://b.basemaps.cartocdn.com/light_all/1/0/1.png"
        );
    }

    #[test]
    fn test_credit_names_in_json() {
        let json = serde_json::to_string(&Credit::OpenStreetMap).expect("serializes");
        assert_eq!(json, "\"open_street_map\"");
        let parsed: Credit = serde_json::from_str("\"carto\"").expect("parses");
        assert_eq!(parsed, Credit::Carto);
    }
}
