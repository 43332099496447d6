//! Point Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state is
//! owned by the CreatePoint page and dropped with it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{City, Item, PointSubmission, Position, State};

/// "Nothing selected" value of the UF and city dropdowns
pub const NO_SELECTION: u32 = 0;

/// Everything the CreatePoint form holds
#[derive(Clone, Debug, Default, Store)]
pub struct PointFormState {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    /// IBGE state id, `NO_SELECTION` when unset
    pub selected_uf: u32,
    /// IBGE district id, `NO_SELECTION` when unset
    pub selected_city: u32,
    /// Map center, from geolocation
    pub initial_position: Position,
    /// Marker position, from geolocation or map clicks
    pub selected_position: Position,
    /// Selected item ids in click order
    pub selected_items: Vec<u32>,
    pub items: Vec<Item>,
    pub states: Vec<State>,
    /// Districts of `selected_uf`
    pub cities: Vec<City>,
    /// A POST to `/points` is in flight
    pub submitting: bool,
}

impl PointFormState {
    /// Select a state; the city choice belongs to the old state so it goes too
    pub fn select_uf(&mut self, uf_id: u32) {
        if self.selected_uf == uf_id {
            return;
        }
        self.selected_uf = uf_id;
        self.selected_city = NO_SELECTION;
        self.cities.clear();
    }

    pub fn toggle_item(&mut self, item_id: u32) {
        toggle_item(&mut self.selected_items, item_id);
    }

    /// Geolocation result moves both the map and the marker
    pub fn set_located(&mut self, position: Position) {
        self.initial_position = position;
        self.selected_position = position;
    }

    pub fn submission(&self) -> PointSubmission {
        let uf = find_state(&self.states, self.selected_uf)
            .map(|state| state.sigla.clone())
            .unwrap_or_default();
        let city = find_city(&self.cities, self.selected_city)
            .map(|city| city.nome.clone())
            .unwrap_or_default();

        PointSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            uf,
            city,
            latitude: self.selected_position.lat,
            longitude: self.selected_position.lng,
            items: self.selected_items.clone(),
        }
    }
}

/// Remove `item_id` if selected, otherwise append it
pub fn toggle_item(selected: &mut Vec<u32>, item_id: u32) {
    if let Some(pos) = selected.iter().position(|id| *id == item_id) {
        selected.remove(pos);
    } else {
        selected.push(item_id);
    }
}

/// Whether a UF change needs a district request: only on a real change to
/// an actual state
pub fn should_fetch_cities(prev: Option<u32>, uf_id: u32) -> bool {
    prev != Some(uf_id) && uf_id != NO_SELECTION
}

/// Whether districts requested for `requested` still match the form.
/// `current` is `None` once the form is gone.
pub fn accepts_cities(current: Option<u32>, requested: u32) -> bool {
    current == Some(requested)
}

pub fn find_state(states: &[State], id: u32) -> Option<&State> {
    states.iter().find(|state| state.id == id)
}

pub fn find_city(cities: &[City], id: u32) -> Option<&City> {
    cities.iter().find(|city| city.id == id)
}

/// Type alias for the store
pub type PointStore = Store<PointFormState>;

/// Get the form store from context
pub fn use_point_store() -> PointStore {
    expect_context::<PointStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_select_uf(store: &PointStore, uf_id: u32) {
    store.update(|state| state.select_uf(uf_id));
}

pub fn store_toggle_item(store: &PointStore, item_id: u32) {
    store.update(|state| state.toggle_item(item_id));
}

// Async results below may land after the page is gone; the `try_*`
// variants make those writes no-ops instead of panics.

pub fn store_set_located(store: &PointStore, position: Position) {
    store.try_update(|state| state.set_located(position));
}

/// Store districts fetched for `uf_id` unless the UF changed meanwhile.
/// Returns whether they were kept.
pub fn store_set_cities(store: &PointStore, uf_id: u32, cities: Vec<City>) -> bool {
    if !accepts_cities(store.selected_uf().try_get_untracked(), uf_id) {
        return false;
    }
    store.cities().try_set(cities);
    true
}
