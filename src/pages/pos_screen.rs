//! Sell Screen
//!
//! Product grid, cart, and the checkout round trip.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::checkout::{run_checkout, CheckoutFlow, CheckoutOutcome};
use crate::components::{CartPanel, Header, ProductGrid, Receipt};
use crate::context::use_pos_context;
use crate::notify::NoticeLevel;
use crate::store::{store_notify, store_notify_error, use_pos_store, PosStateStoreFields};

#[component]
pub fn PosScreen() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();

    let on_checkout = move |_: ()| {
        if store.checkout().read_untracked().is_submitting() {
            return;
        }
        let cart = store.cart().get_untracked();
        if cart.is_empty() {
            return;
        }
        let staff = store.session().read_untracked().staff().cloned();
        let api = ctx.api(staff.as_ref());
        let currency_id = ctx.config.currency_id;

        store.checkout().set(CheckoutFlow::Submitting);
        spawn_local(async move {
            match run_checkout(&api, &cart, staff.as_ref(), currency_id).await {
                CheckoutOutcome::Completed(sale) => {
                    store.checkout().set(CheckoutFlow::Completed(sale));
                    store_notify(&store, NoticeLevel::Success, "Sale completed successfully!");
                }
                CheckoutOutcome::Failed(e) => {
                    store.checkout().set(CheckoutFlow::Idle);
                    store_notify_error(&store, &e);
                }
                CheckoutOutcome::Skipped => store.checkout().set(CheckoutFlow::Idle),
            }
        });
    };

    view! {
        <div class="pos-screen">
            <Header />
            <main class="pos-main">
                <section class="pos-products">
                    <ProductGrid />
                </section>
                <aside class="pos-cart">
                    <CartPanel on_checkout=on_checkout />
                </aside>
            </main>
            {move || store.checkout().read().receipt().cloned().map(|sale| view! { <Receipt sale=sale /> })}
        </div>
    }
}
