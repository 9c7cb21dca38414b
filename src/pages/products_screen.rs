//! Products Screen
//!
//! Read-only catalogue listing for staff.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Header;
use crate::context::use_pos_context;
use crate::format::format_price;
use crate::models::{Category, Product};
use crate::store::{store_notify_error, use_pos_store, PosStateStoreFields};

#[component]
pub fn ProductsScreen() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let currency = ctx.currency().to_string();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (filter, set_filter) = signal::<Option<u32>>(None);
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = ctx.api(store.session().read_untracked().staff());
        spawn_local(async move {
            match api.list_categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(e) => log::warn!("[Products] failed to load categories: {}", e),
            }
            match api.list_products().await {
                Ok(loaded) => set_products.set(loaded),
                Err(e) => {
                    log::error!("[Products] failed to load products: {}", e);
                    store_notify_error(&store, &e);
                }
            }
            set_loading.set(false);
        });
    });

    // Prefer the embedded category, then the id lookup
    let category_name = move |product: &Product| -> String {
        if let Some(label) = product.category_label() {
            return label.to_string();
        }
        product
            .category_id
            .and_then(|id| categories.read_untracked().iter().find(|c| c.id == id).map(|c| c.name.clone()))
            .unwrap_or_else(|| "Uncategorized".to_string())
    };

    let visible = move || {
        let filter = filter.get();
        let needle = query.get().trim().to_lowercase();
        products
            .get()
            .into_iter()
            .filter(|p| filter.is_none() || p.category_id == filter)
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="products-screen">
            <Header />
            <main class="page">
                <h1>"Products"</h1>

                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Search products"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        set_filter.set(event_target_value(&ev).parse::<u32>().ok());
                    }>
                        <option value="">"All categories"</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=|c| view! { <option value=c.id.to_string()>{c.name}</option> }
                        />
                    </select>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="loading">"Loading products..."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Description"</th>
                                <th class="num">"Price"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|p| p.id
                                children={
                                    let currency = currency.clone();
                                    move |p: Product| {
                                        let category = category_name(&p);
                                        let price = format_price(p.price(), &currency);
                                        view! {
                                            <tr class:inactive=!p.is_active>
                                                <td>{p.name}</td>
                                                <td>{category}</td>
                                                <td class="muted">{p.description.unwrap_or_default()}</td>
                                                <td class="num">{price}</td>
                                                <td>{if p.is_active { "Active" } else { "Inactive" }}</td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <p class="muted">{move || format!("{} product(s)", visible().len())}</p>
                </Show>
            </main>
        </div>
    }
}
