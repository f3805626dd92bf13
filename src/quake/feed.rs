//! Fetch pipeline for the earthquake and plate feeds.
//!
//! Uses channel-based communication to bridge the async fetches with
//! egui's synchronous update loop.

use super::feature::{parse_earthquakes, parse_plates, EarthquakeFeature};
use super::FeedError;
use crate::config::MapConfig;
use crate::geo::GeoLayer;
use crate::net::HttpClient;
use eframe::egui;
use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Which feed a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    Plates,
}

impl FeedKind {
    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::Earthquakes => "earthquake feed",
            FeedKind::Plates => "plate boundary feed",
        }
    }
}

/// Outcome of one feed fetch.
#[derive(Debug)]
pub enum FeedResult {
    Earthquakes(Vec<EarthquakeFeature>),
    Plates(GeoLayer),
    Error { feed: FeedKind, error: FeedError },
}

/// Channel-based fetcher for the two feeds.
///
/// Both fetches are started at once; they are unrelated and the order in
/// which they complete does not matter. There is no retry.
pub struct FeedChannel {
    sender: Sender<FeedResult>,
    receiver: Receiver<FeedResult>,
    /// Fetches started but not yet received.
    pending: Cell<usize>,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            pending: Cell::new(0),
        }
    }

    /// Starts fetching every feed the configuration names.
    pub fn fetch_all(&self, ctx: &egui::Context, client: &HttpClient, config: &MapConfig) {
        self.fetch(ctx, client, FeedKind::Earthquakes, config.earthquake_url.clone());

        if let Some(url) = &config.plates_url {
            self.fetch(ctx, client, FeedKind::Plates, url.clone());
        }
    }

    fn fetch(&self, ctx: &egui::Context, client: &HttpClient, kind: FeedKind, url: String) {
        log::info!("Fetching {} from {}", kind.label(), url);
        self.pending.set(self.pending.get() + 1);

        let sender = self.sender.clone();
        client.spawn_get(ctx.clone(), url, move |result| {
            let outcome = result
                .map_err(FeedError::from)
                .and_then(|bytes| decode_feed(kind, &bytes));

            let message = match outcome {
                Ok(message) => message,
                Err(error) => FeedResult::Error { feed: kind, error },
            };
            let _ = sender.send(message);
        });
    }

    /// Returns true while any fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<FeedResult> {
        let result = self.receiver.try_recv().ok()?;
        self.pending.set(self.pending.get().saturating_sub(1));
        Some(result)
    }
}

/// Parses a fetched body according to the feed it came from.
pub fn decode_feed(kind: FeedKind, bytes: &[u8]) -> Result<FeedResult, FeedError> {
    let text = std::str::from_utf8(bytes)?;

    match kind {
        FeedKind::Earthquakes => parse_earthquakes(text).map(FeedResult::Earthquakes),
        FeedKind::Plates => parse_plates(text).map(FeedResult::Plates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_earthquakes() {
        let body = br#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"mag": 1.2},
             "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0]}}
        ]}"#;
        match decode_feed(FeedKind::Earthquakes, body) {
            Ok(FeedResult::Earthquakes(quakes)) => assert_eq!(quakes.len(), 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_plates() {
        let body = br#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"PlateName": "Africa"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}
        ]}"#;
        match decode_feed(FeedKind::Plates, body) {
            Ok(FeedResult::Plates(layer)) => {
                assert_eq!(layer.name, "Tectonic Plates");
                assert_eq!(layer.features.len(), 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let result = decode_feed(FeedKind::Earthquakes, &[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(FeedError::Encoding(_))));
    }

    #[test]
    fn test_empty_channel() {
        let channel = FeedChannel::new();
        assert!(!channel.is_loading());
        assert!(channel.try_recv().is_none());
    }
}
