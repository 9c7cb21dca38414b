//! Header Component
//!
//! Title bar with the cashier's name, screen navigation and logout.

use leptos::prelude::*;

use crate::context::use_pos_context;
use crate::notify::NoticeLevel;
use crate::store::{store_notify, use_pos_store, PosStateStoreFields, Screen};

const NAV: &[(Screen, &str)] = &[
    (Screen::Pos, "Sell"),
    (Screen::Products, "Products"),
    (Screen::Returns, "Returns"),
    (Screen::Reports, "Reports"),
];

#[component]
pub fn Header() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();

    let staff_name = move || {
        store
            .session()
            .read()
            .staff()
            .map(|s| s.name.clone())
    };

    let logout = move |_| {
        store.session().write().logout(ctx.storage.as_ref());
        store.screen().set(Screen::Pos);
        store_notify(&store, NoticeLevel::Info, "Logged out successfully");
    };

    view! {
        <header class="pos-header">
            <div class="pos-header-title">
                <h1>"🎪 Kermesse POS"</h1>
                {move || staff_name().map(|name| view! {
                    <span class="welcome">"Welcome, " <strong>{name}</strong></span>
                })}
            </div>

            <nav class="pos-nav">
                {NAV.iter().map(|(screen, label)| {
                    let screen = *screen;
                    let is_active = move || store.screen().get() == screen;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| store.screen().set(screen)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
                <button class="nav-btn logout" on:click=logout>"Logout"</button>
            </nav>
        </header>
    }
}
