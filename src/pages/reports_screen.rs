//! Reports Screen
//!
//! Today's takings, per-category breakdown and the sales list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Header;
use crate::context::use_pos_context;
use crate::format::{format_date_time, format_price};
use crate::models::{DailyReport, Sale};
use crate::reports::{category_shares, items_sold, today};
use crate::store::{store_notify_error, use_pos_store, PosStateStoreFields};

#[component]
pub fn ReportsScreen() -> impl IntoView {
    let store = use_pos_store();
    let ctx = use_pos_context();
    let currency = ctx.currency().to_string();

    let (report, set_report) = signal::<Option<DailyReport>>(None);
    let (sales, set_sales) = signal(Vec::<Sale>::new());
    let (loading, set_loading) = signal(false);
    let (refresh, set_refresh) = signal(0u32);

    Effect::new(move |_| {
        refresh.track();
        let api = ctx.api(store.session().read_untracked().staff());
        set_loading.set(true);
        spawn_local(async move {
            let date = today();
            match api.daily_report(&date).await {
                Ok(loaded) => {
                    log::info!("[Reports] {} sales on {}", loaded.total_sales, loaded.date);
                    set_report.set(Some(loaded));
                }
                Err(e) => {
                    log::error!("[Reports] failed to load daily report: {}", e);
                    store_notify_error(&store, &e);
                }
            }
            match api.list_sales_today().await {
                Ok(loaded) => set_sales.set(loaded),
                Err(e) => log::warn!("[Reports] failed to load today's sales: {}", e),
            }
            set_loading.set(false);
        });
    });

    let summary = {
        let currency = currency.clone();
        move || {
            report.get().map(|r| {
                let cards = [
                    ("Total Revenue", format_price(r.total_revenue, &currency), None),
                    ("Net Revenue", format_price(r.net_revenue, &currency), None),
                    ("Total Sales", r.total_sales.to_string(), Some(format!("{} items sold", items_sold(&r)))),
                    (
                        "Returns",
                        r.total_returns.to_string(),
                        Some(format!("-{}", format_price(r.return_amount, &currency))),
                    ),
                ];
                let rows = category_shares(&r)
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td>{row.category}</td>
                            <td class="num">{row.items_sold}</td>
                            <td class="num">{format_price(row.revenue, &currency)}</td>
                            <td class="num">{format!("{}%", row.share)}</td>
                        </tr>
                    })
                    .collect_view();

                view! {
                    <div class="summary-cards">
                        {cards.into_iter().map(|(title, value, detail)| view! {
                            <div class="card summary-card">
                                <p class="summary-title">{title}</p>
                                <p class="summary-value">{value}</p>
                                {detail.map(|d| view! { <p class="summary-detail">{d}</p> })}
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="card">
                        <h2>"Sales by Category"</h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Category"</th>
                                    <th class="num">"Items Sold"</th>
                                    <th class="num">"Revenue"</th>
                                    <th class="num">"Share"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
            })
        }
    };

    let sales_list = move || {
        let currency = currency.clone();
        sales
            .get()
            .into_iter()
            .map(|sale| view! {
                <tr>
                    <td class="mono">{sale.id}</td>
                    <td>{format_date_time(&sale.date)}</td>
                    <td class="num">{sale.item_count}</td>
                    <td class="num">{format_price(sale.total(), &currency)}</td>
                    <td>{sale.has_return.then_some("Returned")}</td>
                </tr>
            })
            .collect_view()
    };

    view! {
        <div class="reports-screen">
            <Header />
            <main class="page">
                <div class="page-header">
                    <h1>"Today's Report"</h1>
                    <button
                        class="btn-outline"
                        disabled=move || loading.get()
                        on:click=move |_| set_refresh.update(|n| *n += 1)
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </button>
                </div>

                {summary}

                <div class="card">
                    <h2>"Today's Sales"</h2>
                    <Show
                        when=move || !sales.get().is_empty()
                        fallback=|| view! { <p class="muted">"No sales yet today"</p> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Sale"</th>
                                    <th>"Time"</th>
                                    <th class="num">"Items"</th>
                                    <th class="num">"Total"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{sales_list.clone()}</tbody>
                        </table>
                    </Show>
                </div>
            </main>
        </div>
    }
}
