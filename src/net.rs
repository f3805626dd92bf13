//! HTTP GET for the GeoJSON feeds.
//!
//! Requests are issued off the UI thread: on WASM as a local future, on
//! native as a blocking request on a worker thread. Completion is reported
//! through a callback, after which a repaint is requested so the update
//! loop can pick up the result.

use eframe::egui;
use thiserror::Error;

/// Errors produced by an HTTP fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },
}

/// Shared HTTP client. Cheap to clone.
#[derive(Clone)]
pub struct HttpClient {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::blocking::Client,
    #[cfg(target_arch = "wasm32")]
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new client.
    ///
    /// Native builds send a user agent naming this crate. Browsers supply
    /// their own.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: reqwest::Client::new(),
        })
    }

    /// Fetches `url` in the background and hands the body to `on_done`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_get<F>(&self, ctx: egui::Context, url: String, on_done: F)
    where
        F: FnOnce(Result<Vec<u8>, FetchError>) + Send + 'static,
    {
        let client = self.client.clone();

        std::thread::spawn(move || {
            let result = get_blocking(&client, &url);
            on_done(result);
            ctx.request_repaint();
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn_get<F>(&self, ctx: egui::Context, url: String, on_done: F)
    where
        F: FnOnce(Result<Vec<u8>, FetchError>) + Send + 'static,
    {
        let client = self.client.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = get_async(&client, &url).await;
            on_done(result);
            ctx.request_repaint();
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_blocking(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let start = web_time::Instant::now();
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes()?;
    log::debug!(
        "GET {} -> {} bytes in {:.0} ms",
        url,
        bytes.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(bytes.to_vec())
}

#[cfg(target_arch = "wasm32")]
async fn get_async(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let start = web_time::Instant::now();
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await?;
    log::debug!(
        "GET {} -> {} bytes in {:.0} ms",
        url,
        bytes.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(bytes.to_vec())
}
