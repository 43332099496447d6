//! CreatePoint Page
//!
//! Registration form for a collection point. Loads items and states on
//! mount, reloads districts whenever the UF changes, and posts the form as
//! multipart data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::api;
use crate::browser;
use crate::components::{CitySelect, Header, ItemsGrid, PointMap, UfSelect};
use crate::store::{
    should_fetch_cities, store_set_cities, store_set_located, PointFormState,
    PointFormStateStoreFields,
};

const CREATED_MESSAGE: &str = "Ponto de coleta criado!";
const FAILED_MESSAGE: &str = "Erro ao criar ponto de Coleta. Revisar cadastro.";

#[component]
pub fn CreatePoint() -> impl IntoView {
    let store = Store::new(PointFormState::default());
    provide_context(store);
    let navigate = use_navigate();

    // Geolocate on mount
    Effect::new(move |_| {
        if let Err(err) = browser::locate(move |position| store_set_located(&store, position)) {
            log::warn!("[CreatePoint] geolocation unavailable: {}", err);
        }
    });

    // Load items and states on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(items) => {
                    log::debug!("[CreatePoint] loaded {} items", items.len());
                    store.items().try_set(items);
                }
                Err(err) => log::error!("[CreatePoint] failed to load items: {}", err),
            }
        });
        spawn_local(async move {
            match api::fetch_states().await {
                Ok(states) => {
                    log::debug!("[CreatePoint] loaded {} states", states.len());
                    store.states().try_set(states);
                }
                Err(err) => log::error!("[CreatePoint] failed to load states: {}", err),
            }
        });
    });

    // Reload districts when the UF changes
    Effect::new(move |prev: Option<u32>| {
        let uf = store.selected_uf().get();
        if !should_fetch_cities(prev, uf) {
            return uf;
        }
        spawn_local(async move {
            match api::fetch_cities(uf).await {
                Ok(cities) => {
                    let count = cities.len();
                    if store_set_cities(&store, uf, cities) {
                        log::debug!("[CreatePoint] loaded {} cities for UF {}", count, uf);
                    } else {
                        log::debug!("[CreatePoint] dropping stale cities for UF {}", uf);
                    }
                }
                Err(err) => log::error!("[CreatePoint] failed to load cities for UF {}: {}", uf, err),
            }
        });
        uf
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.submitting().get_untracked() {
            return;
        }
        let submission = store.with_untracked(|state| state.submission());
        store.submitting().set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::create_point(&submission).await;
            store.submitting().try_set(false);
            match result {
                Ok(()) => {
                    log::info!("[CreatePoint] point created");
                    browser::alert(CREATED_MESSAGE);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    log::warn!("[CreatePoint] point not created: {}", err);
                    browser::alert(FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <div id="page-create-point">
            <Header back_link=true />
            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>
                    <div class="field">
                        <label for="name">"Nome da entidade"</label>
                        <input
                            type="text"
                            name="name"
                            id="name"
                            on:input=move |ev| store.name().set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field-group">
                        <div class="field">
                            <label for="email">"E-mail"</label>
                            <input
                                type="email"
                                name="email"
                                id="email"
                                on:input=move |ev| store.email().set(event_target_value(&ev))
                            />
                        </div>
                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input
                                type="text"
                                name="whatsapp"
                                id="whatsapp"
                                on:input=move |ev| store.whatsapp().set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>
                    <PointMap />
                    <div class="field-group">
                        <UfSelect />
                        <CitySelect />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Ítems de coleta"</h2>
                        <span>"Selecione um ou mais ítems abaixo"</span>
                    </legend>
                    <ItemsGrid />
                </fieldset>

                <button type="submit" disabled=move || store.submitting().get()>
                    "Cadastrar ponto de coleta"
                </button>
            </form>
        </div>
    }
}
