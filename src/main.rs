//! Kermesse POS Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod format;
mod notify;
mod cart;
mod auth;
mod session;
mod checkout;
mod returns;
mod reports;
mod api;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
