//! Till State Store
//!
//! Uses Leptos reactive_stores so views only re-render for the field they read.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::checkout::CheckoutFlow;
use crate::models::Product;
use crate::notify::{NoticeLevel, Notices};
use crate::session::Session;

/// How long a toast stays up
const NOTICE_TTL_MS: u32 = 4_000;

/// Which screen the logged-in cashier is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Pos,
    Returns,
    Products,
    Reports,
}

/// State for one browser tab
#[derive(Clone, Debug, Default, Store)]
pub struct PosState {
    /// In-progress sale
    pub cart: Cart,
    /// Logged-in staff member, if any
    pub session: Session,
    /// Checkout request / receipt lifecycle
    pub checkout: CheckoutFlow,
    pub screen: Screen,
    pub notices: Notices,
}

impl PosState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

pub type PosStore = Store<PosState>;

/// Get the till store from context
pub fn use_pos_store() -> PosStore {
    expect_context::<PosStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply `edit` unless a checkout is in flight or its receipt is open.
fn store_edit_cart(store: &PosStore, edit: impl FnOnce(&mut Cart)) {
    // Separate statements: checkout and cart share the store's lock.
    let allowed = store.checkout().read_untracked().allows_cart_edits();
    if !allowed {
        log::debug!("[Cart] edit ignored while checkout is open");
        return;
    }
    let cart_field = store.cart();
    let mut cart = cart_field.write();
    edit(&mut *cart);
}

pub fn store_add_to_cart(store: &PosStore, product: Product) {
    store_edit_cart(store, |cart| cart.add_product(product));
}

pub fn store_set_quantity(store: &PosStore, product_id: u32, quantity: i64) {
    store_edit_cart(store, |cart| cart.set_quantity(product_id, quantity));
}

pub fn store_remove_from_cart(store: &PosStore, product_id: u32) {
    store_edit_cart(store, |cart| cart.remove_product(product_id));
}

pub fn store_clear_cart(store: &PosStore) {
    store_edit_cart(store, Cart::clear);
}

pub fn store_dismiss_receipt(store: &PosStore) {
    // Both fields live behind one lock, so mutate them through the root.
    store.update(|state| state.checkout.dismiss_receipt(&mut state.cart));
}

/// Show a toast that removes itself after a few seconds.
pub fn store_notify(store: &PosStore, level: NoticeLevel, message: impl Into<String>) {
    let id = store.notices().write().push(level, message);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        store.notices().write().dismiss(id);
    });
}

pub fn store_notify_error(store: &PosStore, err: &dyn std::error::Error) {
    store_notify(store, NoticeLevel::Error, err.to_string());
}
