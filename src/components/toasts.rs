//! Toast Component
//!
//! Stack of transient notices in the corner of the screen.

use leptos::prelude::*;

use crate::store::{use_pos_store, PosStateStoreFields};

#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_pos_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.notices().read().items().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class() role="status">
                            <span class="toast-message">{notice.message}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| store.notices().write().dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
