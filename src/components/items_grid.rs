//! Items Grid Component
//!
//! Clickable tiles for the recyclable categories; each click toggles the
//! item in the selection.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_toggle_item, use_point_store, PointFormStateStoreFields};

#[component]
fn ItemTile(item: Item) -> impl IntoView {
    let store = use_point_store();
    let Item { id, title, image_url } = item;
    let alt = title.clone();
    let is_selected = move || store.selected_items().with(|ids| ids.contains(&id));

    view! {
        <li
            class=move || if is_selected() { "selected" } else { "" }
            on:click=move |_| store_toggle_item(&store, id)
        >
            <img src=image_url alt=alt />
            <span>{title}</span>
        </li>
    }
}

#[component]
pub fn ItemsGrid() -> impl IntoView {
    let store = use_point_store();

    view! {
        <ul class="items-grid">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <ItemTile item=item /> }
            />
        </ul>
    }
}
