use crate::api::PortfolioApi;
use crate::components::format;
use crate::components::navbar::AppNavbar;
use crate::models::{PortfolioItem, SellInvestmentRequest};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sell form for the holding of product `:id`.
#[component]
pub fn SellInvestmentPage(id: i64) -> impl IntoView {
    let router = use_router();

    let (holding, set_holding) = signal(Option::<PortfolioItem>::None);
    let (units_input, set_units_input) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 从持仓列表中找到该产品对应的条目
    Effect::new(move |_| {
        let api = PortfolioApi::default();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_holdings().await {
                Ok(data) => {
                    let item = data
                        .holdings
                        .into_iter()
                        .find(|h| h.investment_product_id == id);
                    set_holding.set(item);
                }
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(units) = units_input.get().parse::<f64>() else {
            set_error_msg.set(Some("Enter a valid number of units".to_string()));
            return;
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = PortfolioApi::default();
        spawn_local(async move {
            let req = SellInvestmentRequest {
                investment_product_id: id,
                units,
            };
            match api.sell_investment(&req).await {
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
                    <div class="card-body">
                        <h3 class="card-title">"Sell Investment"</h3>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || loading.get()>
                            <div class="py-8 text-center">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        </Show>

                        <Show when=move || !loading.get() && holding.get().is_none()>
                            <div class="py-4 text-base-content/70">
                                "You don't hold this investment."
                                <button
                                    class="btn btn-ghost btn-sm ml-2"
                                    on:click=move |_| router.navigate("/myportfolio")
                                >
                                    "Back to Portfolio"
                                </button>
                            </div>
                        </Show>

                        <Show when=move || holding.get().is_some()>
                            <div class="stats stats-vertical md:stats-horizontal bg-base-200 rounded-box">
                                <div class="stat">
                                    <div class="stat-title">"Product"</div>
                                    <div class="stat-value text-lg">
                                        {move || holding.get().map(|h| h.investment_product_name).unwrap_or_default()}
                                    </div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Units Owned"</div>
                                    <div class="stat-value text-lg font-mono">
                                        {move || holding.get().map(|h| format::units(h.units_owned)).unwrap_or_default()}
                                    </div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Current Value"</div>
                                    <div class="stat-value text-lg font-mono">
                                        {move || holding.get().map(|h| format::money(h.current_value)).unwrap_or_default()}
                                    </div>
                                </div>
                            </div>

                            <form on:submit=on_submit>
                                <div class="form-control">
                                    <label class="label" for="sell-units">
                                        <span class="label-text">"Units to sell"</span>
                                    </label>
                                    <input
                                        id="sell-units"
                                        type="number"
                                        min="0"
                                        step="any"
                                        placeholder="0.0"
                                        on:input=move |ev| set_units_input.set(event_target_value(&ev))
                                        prop:value=units_input
                                        class="input input-bordered w-full"
                                        required
                                    />
                                    <label class="label">
                                        <span class="label-text-alt text-base-content/50">
                                            "Selling more units than you own is rejected by the backend."
                                        </span>
                                    </label>
                                </div>

                                <div class="card-actions justify-end mt-4">
                                    <button
                                        type="button"
                                        class="btn btn-ghost"
                                        on:click=move |_| router.navigate("/myportfolio")
                                    >
                                        "Cancel"
                                    </button>
                                    <button class="btn btn-error" disabled=move || is_submitting.get()>
                                        {move || if is_submitting.get() {
                                            view! { <span class="loading loading-spinner"></span> "Selling..." }.into_any()
                                        } else {
                                            "Sell".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
