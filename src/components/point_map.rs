//! Point Map Component
//!
//! Leaflet map: centered on the geolocated position, marker on the
//! selected position, clicks move the marker.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::map::PointMapHandle;
use crate::models::Position;
use crate::store::{use_point_store, PointFormStateStoreFields};

#[component]
pub fn PointMap() -> impl IntoView {
    let store = use_point_store();
    let container = NodeRef::<Div>::new();
    let handle: Rc<RefCell<Option<PointMapHandle>>> = Rc::default();

    // Mount once the container exists
    let mount_handle = handle.clone();
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if mount_handle.borrow().is_some() {
            return;
        }
        let center = store.initial_position().get_untracked();
        let on_click = move |position: Position| store.selected_position().set(position);
        match PointMapHandle::mount(&element, center, on_click) {
            Ok(map) => *mount_handle.borrow_mut() = Some(map),
            Err(err) => log::error!("[PointMap] failed to create map: {}", err),
        }
    });

    // Whole-store writes notify every field, so act on real changes only
    let center_handle = handle.clone();
    Effect::new(move |prev: Option<Position>| {
        let center = store.initial_position().get();
        if prev != Some(center) {
            if let Some(map) = center_handle.borrow().as_ref() {
                map.recenter(center);
            }
        }
        center
    });

    Effect::new(move |prev: Option<Position>| {
        let position = store.selected_position().get();
        if prev != Some(position) {
            if let Some(map) = handle.borrow().as_ref() {
                map.move_marker(position);
            }
        }
        position
    });

    view! { <div id="map" node_ref=container></div> }
}
