//! Leaflet Bindings
//!
//! Minimal `wasm_bindgen` view of the global `L` object loaded by
//! `index.html`, plus a handle owning one map with one marker.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config;
use crate::error::ApiError;
use crate::models::Position;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(element: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = on)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, lat_lng: &JsValue) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    attribution: &'static str,
    max_zoom: u8,
}

/// Leaflet accepts `[lat, lng]` arrays anywhere a `LatLng` is expected
fn lat_lng(position: Position) -> Result<JsValue, ApiError> {
    serde_wasm_bindgen::to_value(&[position.lat, position.lng])
        .map_err(|e| ApiError::Browser(e.to_string()))
}

/// Pull `event.latlng` out of a Leaflet mouse event
fn click_position(event: &JsValue) -> Option<Position> {
    let latlng = js_sys::Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    serde_wasm_bindgen::from_value(latlng).ok()
}

/// A mounted map; dropping it detaches the click handler
pub struct PointMapHandle {
    map: LeafletMap,
    marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl PointMapHandle {
    /// Create the map inside `element`, centered on `center` with the marker
    /// there too. `on_click` gets every clicked position.
    pub fn mount(
        element: &HtmlElement,
        center: Position,
        on_click: impl Fn(Position) + 'static,
    ) -> Result<Self, ApiError> {
        let map = leaflet_map(element).map_err(ApiError::from_js)?;
        map.set_view(&lat_lng(center)?, config::MAP_ZOOM);

        let options = serde_wasm_bindgen::to_value(&TileOptions {
            attribution: config::TILE_ATTRIBUTION,
            max_zoom: 19,
        })
        .map_err(|e| ApiError::Browser(e.to_string()))?;
        tile_layer(config::TILE_URL, &options).add_to(&map);

        let marker = marker(&lat_lng(center)?).add_to(&map);

        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match click_position(&event) {
                Some(position) => on_click(position),
                None => log::warn!("[PointMap] click event without latlng"),
            }
        });
        map.on("click", on_click.as_ref().unchecked_ref());

        // The container may get its final size after the first layout pass
        let resize_target = map.clone();
        gloo_timers::callback::Timeout::new(0, move || resize_target.invalidate_size()).forget();

        Ok(Self { map, marker, _on_click: on_click })
    }

    pub fn recenter(&self, center: Position) {
        match lat_lng(center) {
            Ok(center) => {
                self.map.set_view(&center, config::MAP_ZOOM);
            }
            Err(err) => log::error!("[PointMap] {}", err),
        }
    }

    pub fn move_marker(&self, position: Position) {
        match lat_lng(position) {
            Ok(position) => {
                self.marker.set_lat_lng(&position);
            }
            Err(err) => log::error!("[PointMap] {}", err),
        }
    }
}
