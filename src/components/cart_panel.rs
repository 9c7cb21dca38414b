//! Cart Panel Component
//!
//! Lines in the current sale with quantity controls, total and checkout.

use leptos::prelude::*;

use crate::context::use_pos_context;
use crate::format::format_price;
use crate::store::{
    store_clear_cart, store_remove_from_cart, store_set_quantity, use_pos_store,
    PosStateStoreFields,
};

#[component]
pub fn CartPanel(#[prop(into)] on_checkout: Callback<()>) -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let currency = ctx.currency().to_string();

    let is_empty = move || store.cart().read().is_empty();
    let item_count = move || store.cart().read().item_count();
    let submitting = move || store.checkout().read().is_submitting();
    let locked = move || !store.checkout().read().allows_cart_edits();

    let total = {
        let currency = currency.clone();
        move || format_price(store.cart().read().total(), &currency)
    };

    let lines = move || {
        let currency = currency.clone();
        store
            .cart()
            .read()
            .lines()
            .iter()
            .map(|line| {
                let id = line.product.id;
                let qty = i64::from(line.quantity);
                view! {
                    <div class="cart-line">
                        <div class="cart-line-info">
                            <p class="cart-line-name">{line.product.name.clone()}</p>
                            <p class="cart-line-each">
                                {format!("{} each", format_price(line.unit_price(), &currency))}
                            </p>
                        </div>
                        <div class="cart-line-qty">
                            <button disabled=locked on:click=move |_| store_set_quantity(&store, id, qty - 1)>"−"</button>
                            <span>{line.quantity}</span>
                            <button disabled=locked on:click=move |_| store_set_quantity(&store, id, qty + 1)>"+"</button>
                        </div>
                        <p class="cart-line-subtotal">{format_price(line.subtotal(), &currency)}</p>
                        <button
                            class="cart-line-remove"
                            title="Remove"
                            disabled=locked
                            on:click=move |_| store_remove_from_cart(&store, id)
                        >
                            "🗑"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="cart-panel">
            <div class="cart-header">
                <h2>"Cart"</h2>
                <Show when=move || !is_empty()>
                    <span class="cart-count">{item_count}</span>
                </Show>
            </div>

            <div class="cart-lines">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <div class="cart-empty">
                            <p>"Cart is empty"</p>
                            <p class="hint">"Tap products to add them"</p>
                        </div>
                    }
                >
                    {lines.clone()}
                </Show>
            </div>

            <div class="cart-footer">
                <div class="cart-total">
                    <span>"Total"</span>
                    <span class="amount">{total}</span>
                </div>
                <div class="cart-actions">
                    <button
                        class="btn-outline"
                        disabled=move || is_empty() || locked()
                        on:click=move |_| store_clear_cart(&store)
                    >
                        "Clear"
                    </button>
                    <button
                        class="btn-primary"
                        disabled=move || is_empty() || locked()
                        on:click=move |_| on_checkout.run(())
                    >
                        {move || if submitting() { "Processing..." } else { "Checkout" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
