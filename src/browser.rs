//! Browser APIs
//!
//! Blocking alerts and geolocation lookup.

use wasm_bindgen::prelude::*;

use crate::error::ApiError;
use crate::models::Position;

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))
}

/// Show a blocking `window.alert`
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(ApiError::from_js));
    if let Err(err) = shown {
        log::error!("[Browser] alert failed: {}", err);
    }
}

/// Ask the browser for the current position once.
///
/// `on_found` runs only on success; a denied or failed lookup is logged.
pub fn locate(on_found: impl FnOnce(Position) + 'static) -> Result<(), ApiError> {
    let geolocation = window()?
        .navigator()
        .geolocation()
        .map_err(ApiError::from_js)?;

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        let found = Position::new(coords.latitude(), coords.longitude());
        log::debug!("[Browser] located at {}, {}", found.lat, found.lng);
        on_found(found);
    });
    let failure = Closure::once_into_js(move |err: JsValue| {
        log::warn!("[Browser] geolocation failed: {}", ApiError::from_js(err));
    });

    geolocation
        .get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref()))
        .map_err(ApiError::from_js)
}
