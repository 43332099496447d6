//! State and City Selectors
//!
//! Cascading dropdowns: picking a UF resets the city and the page reloads
//! the district list.

use leptos::prelude::*;

use crate::store::{store_select_uf, use_point_store, PointFormStateStoreFields, NO_SELECTION};

fn selected_id(ev: &web_sys::Event) -> u32 {
    event_target_value(ev).parse().unwrap_or(NO_SELECTION)
}

#[component]
pub fn UfSelect() -> impl IntoView {
    let store = use_point_store();

    view! {
        <div class="field">
            <label for="uf">"Estado (UF)"</label>
            <select
                name="uf"
                id="uf"
                prop:value=move || store.selected_uf().get().to_string()
                on:change=move |ev| store_select_uf(&store, selected_id(&ev))
            >
                <option value="0">"Selecione uma UF"</option>
                <For
                    each=move || store.states().get()
                    key=|state| state.id
                    children=move |state| view! {
                        <option value=state.id.to_string()>{state.label()}</option>
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn CitySelect() -> impl IntoView {
    let store = use_point_store();

    view! {
        <div class="field">
            <label for="city">"Cidade"</label>
            <select
                name="city"
                id="city"
                prop:value=move || store.selected_city().get().to_string()
                on:change=move |ev| store.selected_city().set(selected_id(&ev))
            >
                <option value="0">"Selecione uma Cidade"</option>
                <For
                    each=move || store.cities().get()
                    key=|city| city.id
                    children=move |city| view! {
                        <option value=city.id.to_string()>{city.nome}</option>
                    }
                />
            </select>
        </div>
    }
}
