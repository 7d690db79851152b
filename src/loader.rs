//! Data loader - one-shot fetch of `village.json`.
//!
//! Issues a single same-origin GET relative to the page and decodes the body
//! into a [`VillageRecord`]. Every failure class (transport, non-success
//! status, malformed body) collapses to "no record": the condition is logged
//! to the browser console and the page keeps its markup defaults. No retry,
//! no timeout, no caching.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use crate::model::VillageRecord;

/// Path of the village document, relative to the page.
pub const VILLAGE_DATA_URL: &str = "../village.json";

/// Why a load produced no record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The fetch never produced a response (network down, blocked, no window).
    #[error("network error fetching village data")]
    Transport,
    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body was not a readable village document.
    #[error("malformed village document: {0}")]
    Malformed(String),
}

/// Fetch and decode the village document.
#[cfg(target_arch = "wasm32")]
pub async fn load_village_data() -> Result<VillageRecord, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let window = web_sys::window().ok_or(LoadError::Transport)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(VILLAGE_DATA_URL, &opts)
        .map_err(|_| LoadError::Transport)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| LoadError::Transport)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| LoadError::Transport)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .json()
        .map_err(|_| LoadError::Malformed("unreadable body".to_string()))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|_| LoadError::Malformed("body is not valid JSON".to_string()))?;

    serde_wasm_bindgen::from_value(json).map_err(|err| LoadError::Malformed(err.to_string()))
}

/// Load the document, collapsing every failure into `None` after logging it.
#[cfg(target_arch = "wasm32")]
pub async fn try_load_village_data() -> Option<VillageRecord> {
    match load_village_data().await {
        Ok(record) => {
            web_sys::console::log_1(&"Village data loaded successfully".into());
            Some(record)
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Error loading village data: {err}").into());
            None
        }
    }
}
