//! Returns Screen
//!
//! Look a sale up by id, pick lines to hand back, and submit the return.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Header;
use crate::context::use_pos_context;
use crate::error::ReturnError;
use crate::format::{format_date_time, format_price};
use crate::models::{ReturnRecord, Sale};
use crate::notify::NoticeLevel;
use crate::returns::{parse_sale_id, ReturnSelection};
use crate::store::{store_notify, store_notify_error, use_pos_store, PosStateStoreFields};

#[component]
pub fn ReturnsScreen() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let currency = ctx.currency().to_string();

    let (sale_id, set_sale_id) = signal(String::new());
    let (reason, set_reason) = signal(String::new());
    let (history, set_history) = signal(Vec::<ReturnRecord>::new());
    let (processing, set_processing) = signal(false);
    let (found, set_found) = signal::<Option<Sale>>(None);
    let selection = RwSignal::new(ReturnSelection::default());

    let reset = move || {
        set_found.set(None);
        selection.set(ReturnSelection::default());
        set_history.set(Vec::new());
    };

    let api_ctx = ctx.clone();
    let api = move || api_ctx.api(store.session().read_untracked().staff());

    let search = {
        let api = api.clone();
        move || {
            let id = match parse_sale_id(&sale_id.get_untracked()) {
                Ok(id) => id,
                Err(e) => {
                    store_notify_error(&store, &e);
                    return;
                }
            };
            let api = api();
            spawn_local(async move {
                match api.get_sale(id).await {
                    Ok(sale) => {
                        log::info!("[Returns] found sale {} with {} lines", sale.id, sale.items.len());
                        set_found.set(Some(sale.clone()));
                        selection.set(ReturnSelection::for_sale(sale));
                        match api.list_returns_for_sale(id).await {
                            Ok(records) => set_history.set(records),
                            Err(e) => {
                                log::warn!("[Returns] failed to load returns for sale {}: {}", id, e);
                                set_history.set(Vec::new());
                            }
                        }
                    }
                    Err(e) => {
                        reset();
                        store_notify_error(&store, &ReturnError::from(e));
                    }
                }
            });
        }
    };

    let process = {
        let currency = currency.clone();
        move |_: web_sys::MouseEvent| {
            let Some(staff) = store.session().read_untracked().staff().cloned() else {
                return;
            };
            let request = match selection.read_untracked().to_request(&staff.pin, Some(reason.get_untracked())) {
                Ok(request) => request,
                Err(e) => {
                    store_notify_error(&store, &e);
                    return;
                }
            };
            let refund = selection.read_untracked().refund();
            let api = api();
            let currency = currency.clone();
            set_processing.set(true);
            spawn_local(async move {
                match api.create_return(&request).await {
                    Ok(record) => {
                        log::info!("[Returns] return {} recorded for sale {}", record.id, record.sale_id);
                        store_notify(
                            &store,
                            NoticeLevel::Success,
                            format!("Return processed! Refund: {}", format_price(refund, &currency)),
                        );
                        reset();
                        set_sale_id.set(String::new());
                        set_reason.set(String::new());
                    }
                    Err(e) => store_notify_error(&store, &ReturnError::Api(e)),
                }
                set_processing.set(false);
            });
        }
    };

    let search_click = search.clone();
    let sale_details = {
        let currency = currency.clone();
        move || {
            let sale = found.get()?;
            let currency = currency.clone();
            let rows = sale
                .items
                .iter()
                .map(|item| {
                    let item_id = item.id;
                    let sold = item.quantity;
                    let price = item.retail_price;
                    view! {
                        <tr class=move || if selection.read().is_selected(item_id) { "selected" } else { "" }>
                            <td>
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.read().is_selected(item_id)
                                    on:change=move |_| selection.write().toggle(item_id)
                                />
                            </td>
                            <td>{item.display_name()}</td>
                            <td class="num">{sold}</td>
                            <td class="num">
                                <Show when=move || selection.read().is_selected(item_id)>
                                    <input
                                        type="number"
                                        min="1"
                                        max=sold.to_string()
                                        prop:value=move || selection.read().quantity_of(item_id).to_string()
                                        on:input=move |ev| {
                                            let qty = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                            selection.write().set_quantity(item_id, qty);
                                        }
                                    />
                                </Show>
                            </td>
                            <td class="num">{format_price(price, &currency)}</td>
                            <td class="num">
                                {
                                    let currency = currency.clone();
                                    move || if selection.read().is_selected(item_id) {
                                        format_price(selection.read().line_refund(item_id), &currency)
                                    } else {
                                        "-".to_string()
                                    }
                                }
                            </td>
                        </tr>
                    }
                })
                .collect_view();

            Some(view! {
                <div class="card">
                    <div class="card-header">
                        <h2>"Sale Details"</h2>
                        {sale.has_return.then(|| view! { <span class="badge">"has returns"</span> })}
                        <p>{format!("Sale ID: {}", sale.id)}</p>
                        <p>{format!("Date: {}", format_date_time(&sale.date))}</p>
                        <p>{format!("Total: {}", format_price(sale.total(), &currency))}</p>
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Select"</th>
                                <th>"Item"</th>
                                <th>"Qty Sold"</th>
                                <th>"Return Qty"</th>
                                <th>"Unit Price"</th>
                                <th>"Refund"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            })
        }
    };

    let selected_count = move || selection.read().selected_count();
    let refund_total = move || format_price(selection.read().refund(), &currency);

    let refund_summary = view! {
        <Show when=move || { selected_count() > 0 }>
            <div class="refund-summary">
                <span class="warning">{move || format!("{} item(s) selected for return", selected_count())}</span>
                <span class="refund-total">"Refund: " <strong>{refund_total.clone()}</strong></span>
                <input
                    type="text"
                    placeholder="Reason (optional)"
                    prop:value=move || reason.get()
                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                />
                <button
                    class="btn-primary"
                    disabled=move || processing.get()
                    on:click=process.clone()
                >
                    {move || if processing.get() { "Processing..." } else { "Process Return" }}
                </button>
            </div>
        </Show>
    };

    view! {
        <div class="returns-screen">
            <Header />
            <main class="page">
                <h1>"Process Returns"</h1>

                <div class="card">
                    <h2>"Find Sale"</h2>
                    <div class="search-row">
                        <input
                            type="text"
                            placeholder="Enter Sale ID (e.g., 1042)"
                            prop:value=move || sale_id.get()
                            on:input=move |ev| set_sale_id.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    search();
                                }
                            }
                        />
                        <button class="btn-primary" on:click=move |_| search_click()>"Search"</button>
                    </div>
                </div>

                {sale_details}
                {refund_summary}

                <Show when=move || !history.get().is_empty()>
                    <div class="card">
                        <h2>"Previous Returns"</h2>
                        <ul class="return-history">
                            {move || history.get().into_iter().map(|r| view! {
                                <li>{format!("#{} on {}", r.id, format_date_time(&r.created_at))}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>
            </main>
        </div>
    }
}
