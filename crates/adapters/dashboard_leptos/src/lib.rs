use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod browser;
mod components;
mod config;
mod pages;
mod poller;
mod state;

use components::ToastContainer;
use pages::{Dashboard, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let toast_ms = config.display.toast_ms;
    provide_context(config);

    view! {
        <ToastContainer lifetime_ms=toast_ms>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Dashboard/>
                        <Route path=path!("dashboard") view=Dashboard/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
