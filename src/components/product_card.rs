//! Product Card Component

use leptos::prelude::*;

use crate::context::use_pos_context;
use crate::format::format_price;
use crate::models::Product;
use crate::store::{store_add_to_cart, use_pos_store, PosStateStoreFields};

/// Tile that adds one unit of `product` to the cart when tapped
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();

    let id = product.id;
    let name = product.name.clone();
    let price = format_price(product.price(), ctx.currency());
    let in_cart = move || store.cart().read().quantity_of(id);

    view! {
        <button
            class="product-card"
            disabled=move || !store.checkout().read().allows_cart_edits()
            on:click=move |_| store_add_to_cart(&store, product.clone())
        >
            <span class="product-name">{name}</span>
            <span class="product-price">{price}</span>
            {move || in_cart().map(|qty| view! {
                <span class="product-badge">{qty}</span>
            })}
        </button>
    }
}
