//! Receipt Component
//!
//! Modal showing the server-confirmed sale. Dismissing it empties the cart.

use leptos::prelude::*;

use crate::context::use_pos_context;
use crate::format::{format_date_time, format_price};
use crate::models::Sale;
use crate::store::{store_dismiss_receipt, use_pos_store};

#[component]
pub fn Receipt(sale: Sale) -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let currency = ctx.currency().to_string();

    let print = move |_| {
        if let Err(e) = window().print() {
            log::warn!("[Receipt] print failed: {:?}", e);
        }
    };

    let lines = sale
        .items
        .iter()
        .map(|item| {
            view! {
                <div class="receipt-line">
                    <span>{format!("{}x {}", item.quantity, item.display_name())}</span>
                    <span>{format_price(item.line_total(), &currency)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="receipt-overlay">
            <div class="receipt-card">
                <h2 class="receipt-title">"Sale Complete!"</h2>

                <div class="print-receipt">
                    <div class="receipt-head">
                        <h3>"Kermesse Festival"</h3>
                        <p>"Thank you for your purchase!"</p>
                    </div>
                    <div class="receipt-meta">
                        <div><span>"Sale ID:"</span><span class="mono">{sale.id}</span></div>
                        <div><span>"Date:"</span><span>{format_date_time(&sale.date)}</span></div>
                    </div>
                    <div class="receipt-lines">{lines}</div>
                    <div class="receipt-total">
                        <span>"TOTAL"</span>
                        <span>{format_price(sale.total(), &currency)}</span>
                    </div>
                    <p class="receipt-foot">"Enjoy the festival! 🎪"</p>
                </div>

                <div class="receipt-actions">
                    <button class="btn-outline" on:click=print>"Print Receipt"</button>
                    <button class="btn-primary" on:click=move |_| store_dismiss_receipt(&store)>
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}
