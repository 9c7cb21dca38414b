//! Kermesse POS App
//!
//! Root component: builds the per-tab state, provides it via context, and
//! picks the screen to show.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::DemoStaffDirectory;
use crate::components::{PinLogin, Toasts};
use crate::config::AppConfig;
use crate::context::PosContext;
use crate::pages::{PosScreen, ProductsScreen, ReportsScreen, ReturnsScreen};
use crate::session::{BrowserSessionStorage, Session};
use crate::store::{PosState, PosStateStoreFields, Screen};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] API base URL: {}", config.api_base_url);

    let storage = BrowserSessionStorage;
    let session = Session::restore(&storage);
    let store = Store::new(PosState::new(session));

    // Provide context to all children
    provide_context(store);
    provide_context(PosContext::new(
        config,
        Arc::new(storage),
        Arc::new(DemoStaffDirectory),
    ));

    let logged_in = move || store.session().read().is_logged_in();

    view! {
        <Toasts />
        {move || {
            if !logged_in() {
                return view! { <PinLogin /> }.into_any();
            }
            match store.screen().get() {
                Screen::Pos => view! { <PosScreen /> }.into_any(),
                Screen::Returns => view! { <ReturnsScreen /> }.into_any(),
                Screen::Products => view! { <ProductsScreen /> }.into_any(),
                Screen::Reports => view! { <ReportsScreen /> }.into_any(),
            }
        }}
    }
}
