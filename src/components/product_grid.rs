//! Product Grid Component
//!
//! Sellable products with category filter tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProductCard;
use crate::context::use_pos_context;
use crate::models::{Category, Product};
use crate::store::{store_notify_error, use_pos_store, PosStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (selected_category, set_selected_category) = signal::<Option<u32>>(None);
    let (loading, set_loading) = signal(true);

    // Load catalogue on mount
    Effect::new(move |_| {
        let api = ctx.api(store.session().read_untracked().staff());
        spawn_local(async move {
            match api.list_products().await {
                Ok(loaded) => {
                    log::info!("[ProductGrid] loaded {} products", loaded.len());
                    set_products.set(loaded);
                }
                Err(e) => {
                    log::error!("[ProductGrid] failed to load products: {}", e);
                    store_notify_error(&store, &e);
                }
            }
            if let Ok(loaded) = api.list_categories().await {
                set_categories.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let visible = move || {
        let filter = selected_category.get();
        products
            .get()
            .into_iter()
            .filter(|p| p.is_active)
            .filter(|p| filter.is_none() || p.category_id == filter)
            .collect::<Vec<_>>()
    };

    let tab_class = move |id: Option<u32>| {
        if selected_category.get() == id { "category-tab active" } else { "category-tab" }
    };

    view! {
        <div class="product-grid-panel">
            <div class="category-tabs">
                <button class=move || tab_class(None) on:click=move |_| set_selected_category.set(None)>
                    "All"
                </button>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |c| {
                        let id = Some(c.id);
                        view! {
                            <button
                                class=move || tab_class(id)
                                on:click=move |_| set_selected_category.set(id)
                            >
                                {c.name}
                            </button>
                        }
                    }
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading products..."</p> }
            >
                <div class="product-grid">
                    <For
                        each=visible
                        key=|p| p.id
                        children=|p| view! { <ProductCard product=p /> }
                    />
                </div>
            </Show>
        </div>
    }
}
