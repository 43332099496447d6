//! Ecoleta Frontend App
//!
//! Root component with client-side routing.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::pages::{CreatePoint, Home};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=Home />
                <Route path=StaticSegment("create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}
