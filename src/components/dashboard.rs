use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::icons::{PieChart, RefreshCw, TrendingUp, Wallet};
use crate::components::navbar::AppNavbar;
use crate::models::{AllocationSlice, GainEntry, PortfolioSummary};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let router = use_router();

    let (summary, set_summary) = signal(Option::<PortfolioSummary>::None);
    let (allocation, set_allocation) = signal(Vec::<AllocationSlice>::new());
    let (gains, set_gains) = signal(Vec::<GainEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = PortfolioApi::default();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.get_summary().await {
                Ok(data) => set_summary.set(Some(data)),
                Err(e) => set_error_msg.set(Some(e)),
            }
            match api.get_allocation().await {
                Ok(data) => set_allocation.set(data.allocations),
                Err(e) => set_error_msg.set(Some(e)),
            }
            match api.get_gains().await {
                Ok(data) => set_gains.set(data.gains),
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let total_returns_class = move || {
        let positive = summary
            .get()
            .map(|s| s.total_returns >= 0.0)
            .unwrap_or(true);
        if positive {
            "stat-value text-success text-2xl"
        } else {
            "stat-value text-error text-2xl"
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AppNavbar />

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error shadow-lg">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Wallet attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Current Value"</div>
                        <div class="stat-value text-primary text-2xl">
                            {move || summary.get().map(|s| format::money(s.total_current_value)).unwrap_or_else(|| "—".to_string())}
                        </div>
                        <div class="stat-desc">
                            {move || summary.get().map(|s| format!("{} holdings", s.holdings_count)).unwrap_or_default()}
                        </div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">"Invested"</div>
                        <div class="stat-value text-2xl">
                            {move || summary.get().map(|s| format::money(s.total_invested_value)).unwrap_or_else(|| "—".to_string())}
                        </div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-success">
                            <TrendingUp attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Total Returns"</div>
                        <div class=total_returns_class>
                            {move || summary.get().map(|s| format::money(s.total_returns)).unwrap_or_else(|| "—".to_string())}
                        </div>
                        <div class="stat-desc">
                            {move || summary.get().map(|s| format::signed_percent(s.percentage_return)).unwrap_or_default()}
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    // 资产配置
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h3 class="card-title gap-2">
                                    <PieChart attr:class="h-5 w-5 text-primary" />
                                    "Allocation"
                                </h3>
                                <button
                                    on:click=move |_| load()
                                    disabled=move || loading.get()
                                    class="btn btn-ghost btn-circle btn-sm"
                                >
                                    <RefreshCw attr:class=move || if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" } />
                                </button>
                            </div>

                            <Show when=move || allocation.with(|a| a.is_empty()) && !loading.get()>
                                <p class="text-base-content/50 py-4">
                                    "Nothing invested yet. Browse the catalog to get started."
                                </p>
                            </Show>

                            <For
                                each=move || allocation.get()
                                key=|slice| slice.investment_type.clone()
                                children=move |slice| {
                                    let pct = slice.percentage;
                                    view! {
                                        <div class="py-1">
                                            <div class="flex justify-between text-sm">
                                                <span class="font-medium">{slice.investment_type.clone()}</span>
                                                <span class="opacity-70">
                                                    {format::money(slice.current_value)}
                                                    " · "
                                                    {format!("{:.1}%", pct)}
                                                </span>
                                            </div>
                                            <progress
                                                class="progress progress-primary w-full"
                                                value=format!("{:.1}", pct)
                                                max="100"
                                            ></progress>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>

                    // 各持仓收益
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <div class="p-6 pb-2">
                                <h3 class="card-title gap-2">
                                    <TrendingUp attr:class="h-5 w-5 text-primary" />
                                    "Gains"
                                </h3>
                            </div>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Product"</th>
                                            <th class="text-right">"Invested"</th>
                                            <th class="text-right">"Current"</th>
                                            <th class="text-right">"Return"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || gains.with(|g| g.is_empty()) && !loading.get()>
                                            <tr>
                                                <td colspan="4" class="text-center py-8 text-base-content/50">
                                                    "No holdings to report on."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || gains.get()
                                            key=|entry| entry.investment_product_name.clone()
                                            children=move |entry| {
                                                let positive = entry.absolute_return >= 0.0;
                                                view! {
                                                    <tr>
                                                        <td class="font-medium">{entry.investment_product_name.clone()}</td>
                                                        <td class="text-right">{format::money(entry.invested_value)}</td>
                                                        <td class="text-right">{format::money(entry.current_value)}</td>
                                                        <td class=move || if positive { "text-right text-success" } else { "text-right text-error" }>
                                                            {format::money(entry.absolute_return)}
                                                            " ("
                                                            {format::signed_percent(entry.percentage_return)}
                                                            ")"
                                                        </td>
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

                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-primary" on:click=move |_| router.navigate("/BuyInvestment")>
                        "Buy Investment"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| router.navigate("/myportfolio")>
                        "View Holdings"
                    </button>
                    <button class="btn btn-ghost" on:click=move |_| router.navigate("/transactions")>
                        "Transaction History"
                    </button>
                </div>
            </div>
        </div>
    }
}
