//! Page Header

use leptos::prelude::*;
use leptos_router::components::A;

/// Logo, plus a link back home on inner pages
#[component]
pub fn Header(#[prop(optional)] back_link: bool) -> impl IntoView {
    view! {
        <header>
            <img src="/assets/logo.svg" alt="Ecoleta" />
            <Show when=move || back_link>
                <A href="/">
                    <span class="back-arrow">"←"</span>
                    "Voltar para Home"
                </A>
            </Show>
        </header>
    }
}
