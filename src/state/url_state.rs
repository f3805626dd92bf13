//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the map center, zoom and base layer in the URL query string
//! so reloading restores the view and URLs can be shared.

/// Parsed URL parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UrlParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zoom: Option<f64>,
    pub base: Option<usize>,
}

/// Parses a query string such as `?lat=37.1&lon=-95.7&z=5&base=1`.
///
/// Unknown keys and unparsable values are ignored.
pub fn parse_query(query: &str) -> UrlParams {
    let mut params = UrlParams::default();

    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        match key {
            "lat" => params.lat = value.parse().ok().filter(|v: &f64| v.is_finite()),
            "lon" => params.lon = value.parse().ok().filter(|v: &f64| v.is_finite()),
            "z" => params.zoom = value.parse().ok().filter(|v: &f64| v.is_finite()),
            "base" => params.base = value.parse().ok(),
            _ => {}
        }
    }

    params
}

/// Formats the query string for a view.
pub fn format_query(lat: f64, lon: f64, zoom: f64, base: usize) -> String {
    format!("?lat={:.4}&lon={:.4}&z={:.2}&base={}", lat, lon, zoom, base)
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let search = web_sys::window().and_then(|w| w.location().search().ok());

    match search {
        Some(search) => parse_query(&search),
        None => UrlParams::default(),
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

/// Push current state to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(lat: f64, lon: f64, zoom: f64, base: usize) {
    let query = format_query(lat, lon, zoom, base);

    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query));
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_lat: f64, _lon: f64, _zoom: f64, _base: usize) {}
