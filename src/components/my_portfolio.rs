use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::icons::RefreshCw;
use crate::components::navbar::AppNavbar;
use crate::models::PortfolioResponse;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MyPortfolioPage() -> impl IntoView {
    let router = use_router();

    let (portfolio, set_portfolio) = signal(Option::<PortfolioResponse>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = PortfolioApi::default();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.get_holdings().await {
                Ok(data) => set_portfolio.set(Some(data)),
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let holdings = move || {
        portfolio
            .get()
            .map(|p| p.holdings)
            .unwrap_or_default()
    };
    let is_empty = move || holdings().is_empty();

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
                                <h3 class="card-title">"My Portfolio"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Everything you currently hold."
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
                                        <th>"Product"</th>
                                        <th class="text-right">"Units"</th>
                                        <th class="text-right hidden md:table-cell">"Avg. Price"</th>
                                        <th class="text-right hidden md:table-cell">"NAV"</th>
                                        <th class="text-right">"Invested"</th>
                                        <th class="text-right">"Current"</th>
                                        <th class="text-right">"Return"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || is_empty() && !loading.get()>
                                        <tr>
                                            <td colspan="8" class="text-center py-8 text-base-content/50">
                                                "Your portfolio is empty. Buy an investment to get started."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading.get() && is_empty()>
                                        <tr>
                                            <td colspan="8" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=holdings
                                        key=|item| item.id
                                        children=move |item| {
                                            let product_id = item.investment_product_id;
                                            let positive = item.absolute_return >= 0.0;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="font-medium">{item.investment_product_name.clone()}</div>
                                                        <div class="text-xs opacity-50">
                                                            {item.product_type.clone()} " · " {item.risk_level.clone()}
                                                        </div>
                                                    </td>
                                                    <td class="text-right font-mono">{format::units(item.units_owned)}</td>
                                                    <td class="text-right font-mono hidden md:table-cell">
                                                        {format::money(item.avg_purchase_price)}
                                                    </td>
                                                    <td class="text-right font-mono hidden md:table-cell">
                                                        {format::money(item.current_nav)}
                                                    </td>
                                                    <td class="text-right font-mono">{format::money(item.invested_value)}</td>
                                                    <td class="text-right font-mono">{format::money(item.current_value)}</td>
                                                    <td class=move || if positive { "text-right text-success" } else { "text-right text-error" }>
                                                        {format::signed_percent(item.percentage_return)}
                                                    </td>
                                                    <td>
                                                        <div class="flex gap-1 justify-end">
                                                            <button
                                                                class="btn btn-outline btn-primary btn-xs"
                                                                on:click=move |_| {
                                                                    router.navigate(&format!("/buy-investment/{}", product_id))
                                                                }
                                                            >
                                                                "Buy"
                                                            </button>
                                                            <button
                                                                class="btn btn-outline btn-error btn-xs"
                                                                on:click=move |_| {
                                                                    router.navigate(&format!("/sell-investment/{}", product_id))
                                                                }
                                                            >
                                                                "Sell"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                                <tfoot>
                                    <Show when=move || portfolio.get().is_some()>
                                        <tr class="font-bold">
                                            <td>"Total"</td>
                                            <td></td>
                                            <td class="hidden md:table-cell"></td>
                                            <td class="hidden md:table-cell"></td>
                                            <td class="text-right font-mono">
                                                {move || portfolio.get().map(|p| format::money(p.total_invested_value)).unwrap_or_default()}
                                            </td>
                                            <td class="text-right font-mono">
                                                {move || portfolio.get().map(|p| format::money(p.total_current_value)).unwrap_or_default()}
                                            </td>
                                            <td></td>
                                            <td></td>
                                        </tr>
                                    </Show>
                                </tfoot>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
