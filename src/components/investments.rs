use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::icons::{RefreshCw, ShoppingCart};
use crate::components::navbar::AppNavbar;
use crate::models::InvestmentProduct;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn risk_badge_class(risk: &str) -> &'static str {
    match risk {
        "LOW" => "badge badge-success badge-outline",
        "MEDIUM" => "badge badge-warning badge-outline",
        "HIGH" => "badge badge-error badge-outline",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn InvestmentsPage() -> impl IntoView {
    let router = use_router();

    let (products, set_products) = signal(Vec::<InvestmentProduct>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = PortfolioApi::default();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.get_products().await {
                Ok(data) => set_products.set(data),
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
                                <h3 class="card-title">"Investment Catalog"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Products currently open for investment."
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
                                        <th>"Name"</th>
                                        <th class="hidden md:table-cell">"Type"</th>
                                        <th>"Risk"</th>
                                        <th class="text-right">"NAV"</th>
                                        <th class="text-right hidden md:table-cell">"Min. Investment"</th>
                                        <th class="text-right hidden md:table-cell">"Expected p.a."</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || products.with(|p| p.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                "No products available right now."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading.get() && products.with(|p| p.is_empty())>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || products.get()
                                        key=|p| p.id
                                        children=move |product| {
                                            let id = product.id;
                                            let inactive = !product.active;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="font-medium">{product.name.clone()}</div>
                                                        <div class="text-xs opacity-50 hidden md:block">
                                                            {product.description.clone().unwrap_or_default()}
                                                        </div>
                                                    </td>
                                                    <td class="hidden md:table-cell">
                                                        <span class="badge badge-ghost">{product.product_type.clone()}</span>
                                                    </td>
                                                    <td>
                                                        <span class=risk_badge_class(&product.risk_level)>
                                                            {product.risk_level.clone()}
                                                        </span>
                                                    </td>
                                                    <td class="text-right font-mono">
                                                        {format::money(product.current_net_asset_value_per_unit)}
                                                    </td>
                                                    <td class="text-right font-mono hidden md:table-cell">
                                                        {format::money(product.minimum_investment)}
                                                    </td>
                                                    <td class="text-right hidden md:table-cell">
                                                        {format!("{:.2}%", product.expected_annual_return_rate)}
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn-primary btn-sm gap-1"
                                                            disabled=inactive
                                                            on:click=move |_| {
                                                                router.navigate(&format!("/buy-investment/{}", id))
                                                            }
                                                        >
                                                            <ShoppingCart attr:class="h-4 w-4" />
                                                            "Buy"
                                                        </button>
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
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_badge_class_covers_backend_levels() {
        assert_eq!(risk_badge_class("LOW"), "badge badge-success badge-outline");
        assert_eq!(risk_badge_class("HIGH"), "badge badge-error badge-outline");
        // 未知等级回退为中性样式
        assert_eq!(risk_badge_class("UNKNOWN"), "badge badge-ghost");
    }
}
