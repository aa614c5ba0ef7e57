use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::icons::ShoppingCart;
use crate::components::navbar::AppNavbar;
use crate::models::{BuyInvestmentRequest, InvestmentProduct};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Buy form. `preselected` comes from the `/buy-investment/:id` route;
/// `/BuyInvestment` lands here with no preselection.
#[component]
pub fn BuyInvestmentPage(preselected: Option<i64>) -> impl IntoView {
    let router = use_router();

    let (products, set_products) = signal(Vec::<InvestmentProduct>::new());
    let (selected_id, set_selected_id) = signal(preselected);
    let (units_input, set_units_input) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = PortfolioApi::default();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_products().await {
                Ok(data) => set_products.set(data),
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let selected_product = move || {
        let id = selected_id.get()?;
        products.with(|ps| ps.iter().find(|p| p.id == id).cloned())
    };

    let estimated_cost = move || {
        let units: f64 = units_input.get().parse().unwrap_or(0.0);
        selected_product().map(|p| units * p.current_net_asset_value_per_unit)
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(product_id) = selected_id.get() else {
            set_error_msg.set(Some("Select a product first".to_string()));
            return;
        };
        let Ok(units) = units_input.get().parse::<f64>() else {
            set_error_msg.set(Some("Enter a valid number of units".to_string()));
            return;
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = PortfolioApi::default();
        spawn_local(async move {
            let req = BuyInvestmentRequest {
                investment_product_id: product_id,
                units,
            };
            match api.buy_investment(&req).await {
                Ok(_) => {
                    router.navigate("/myportfolio");
                }
                Err(e) => {
                    set_error_msg.set(Some(e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AppNavbar />

                <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto w-full">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title gap-2">
                            <ShoppingCart attr:class="h-5 w-5 text-primary" />
                            "Buy Investment"
                        </h3>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="product">
                                <span class="label-text">"Product"</span>
                            </label>
                            <select
                                id="product"
                                class="select select-bordered"
                                disabled=move || loading.get()
                                prop:value=move || {
                                    selected_id.get().map(|id| id.to_string()).unwrap_or_default()
                                }
                                on:change=move |ev| {
                                    set_selected_id.set(event_target_value(&ev).parse::<i64>().ok())
                                }
                            >
                                <option value="" disabled selected=move || selected_id.get().is_none()>
                                    {move || if loading.get() { "Loading products..." } else { "Choose a product" }}
                                </option>
                                <For
                                    each=move || products.get()
                                    key=|p| p.id
                                    children=move |product| {
                                        view! {
                                            <option value=product.id.to_string() disabled=!product.active>
                                                {product.name.clone()}
                                                " ("
                                                {format::money(product.current_net_asset_value_per_unit)}
                                                "/unit)"
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>

                        <Show when=move || selected_product().is_some()>
                            <div class="text-sm text-base-content/70">
                                {move || selected_product().map(|p| {
                                    format!(
                                        "Minimum investment {} · risk {} · expected {:.2}% p.a.",
                                        format::money(p.minimum_investment),
                                        p.risk_level,
                                        p.expected_annual_return_rate,
                                    )
                                }).unwrap_or_default()}
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="units">
                                <span class="label-text">"Units"</span>
                            </label>
                            <input
                                id="units"
                                type="number"
                                min="0"
                                step="any"
                                placeholder="0.0"
                                on:input=move |ev| set_units_input.set(event_target_value(&ev))
                                prop:value=units_input
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <Show when=move || estimated_cost().is_some()>
                            <div class="stat bg-base-200 rounded-box">
                                <div class="stat-title">"Estimated Cost"</div>
                                <div class="stat-value text-primary text-2xl">
                                    {move || estimated_cost().map(format::money).unwrap_or_default()}
                                </div>
                                <div class="stat-desc">"Final amount is settled at the NAV applied by the backend."</div>
                            </div>
                        </Show>

                        <div class="card-actions justify-end mt-4">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate("/investments")
                            >
                                "Back to Catalog"
                            </button>
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Placing order..." }.into_any()
                                } else {
                                    "Buy".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
