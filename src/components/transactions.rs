use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::icons::{History, RefreshCw};
use crate::components::navbar::AppNavbar;
use crate::models::{TransactionRecord, TransactionType};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let (transactions, set_transactions) = signal(Vec::<TransactionRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = PortfolioApi::default();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.get_transactions().await {
                Ok(data) => set_transactions.set(data.transactions),
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AppNavbar />

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error shadow-lg">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title gap-2">
                                    <History attr:class="h-5 w-5 text-primary" />
                                    "Transaction History"
                                </h3>
                                <p class="text-base-content/70 text-sm">
                                    "All buys and sells, newest first."
                                </p>
                            </div>
                            <button
                                on:click=move |_| load()
                                disabled=move || loading.get()
                                class="btn btn-ghost btn-circle"
                            >
                                <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                            </button>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Date"</th>
                                        <th>"Product"</th>
                                        <th>"Type"</th>
                                        <th class="text-right">"Units"</th>
                                        <th class="text-right hidden md:table-cell">"NAV"</th>
                                        <th class="text-right">"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || transactions.with(|t| t.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                "No transactions yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading.get() && transactions.with(|t| t.is_empty())>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || transactions.get()
                                        key=|txn| txn.id
                                        children=move |txn| {
                                            let is_buy = txn.txn_type == TransactionType::Buy;
                                            view! {
                                                <tr>
                                                    <td class="font-mono text-sm opacity-70">{txn.txn_date.clone()}</td>
                                                    <td class="font-medium">{txn.investment_product_name.clone()}</td>
                                                    <td>
                                                        <span class=move || if is_buy { "badge badge-success badge-outline" } else { "badge badge-error badge-outline" }>
                                                            {if is_buy { "BUY" } else { "SELL" }}
                                                        </span>
                                                    </td>
                                                    <td class="text-right font-mono">{format::units(txn.units)}</td>
                                                    <td class="text-right font-mono hidden md:table-cell">
                                                        {format::money(txn.nav_at_txn)}
                                                    </td>
                                                    <td class="text-right font-mono">{format::money(txn.amount)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
