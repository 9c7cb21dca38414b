//! PIN Login Component
//!
//! Numeric keypad for staff login.

use leptos::prelude::*;

use crate::auth::{PinEntry, PIN_LENGTH};
use crate::context::use_pos_context;
use crate::notify::NoticeLevel;
use crate::store::{store_notify, store_notify_error, use_pos_store, PosStateStoreFields, Screen};

const KEYPAD: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[component]
pub fn PinLogin() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let entry = RwSignal::new(PinEntry::default());
    let hint = ctx.directory.hint();

    let submit = move |_| {
        let pin = entry.read().as_str().to_string();
        let result = store
            .session()
            .write()
            .login(&pin, ctx.directory.as_ref(), ctx.storage.as_ref());
        match result {
            Ok(staff) => {
                store.screen().set(Screen::Pos);
                store_notify(&store, NoticeLevel::Success, format!("Welcome, {}!", staff.name));
            }
            Err(e) => {
                log::info!("[Login] rejected: {}", e);
                entry.write().clear();
                store_notify_error(&store, &e);
            }
        }
    };

    let digit_button = move |digit: char| {
        view! {
            <button
                class="keypad-btn"
                on:click=move |_| entry.write().push_digit(digit)
            >
                {digit.to_string()}
            </button>
        }
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <h1 class="login-title">"Kermesse POS"</h1>
                <p class="login-subtitle">"Enter your staff PIN to continue"</p>

                <div class="pin-slots">
                    {(0..PIN_LENGTH).map(|i| {
                        let filled = move || entry.read().len() > i;
                        view! {
                            <div class=move || if filled() { "pin-slot filled" } else { "pin-slot" }>
                                {move || if filled() { "•" } else { "" }}
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="keypad">
                    {KEYPAD.iter().map(|d| digit_button(*d)).collect_view()}
                    <button class="keypad-btn ghost" on:click=move |_| entry.write().clear()>
                        "Clear"
                    </button>
                    {digit_button('0')}
                    <button class="keypad-btn ghost" on:click=move |_| entry.write().backspace()>
                        "⌫"
                    </button>
                </div>

                <button
                    class="login-btn"
                    disabled=move || !entry.read().is_complete()
                    on:click=submit
                >
                    "Login"
                </button>

                {hint.map(|h| view! { <p class="login-hint">{h}</p> })}
            </div>
        </div>
    }
}
