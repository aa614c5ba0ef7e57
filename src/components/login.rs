use crate::auth::{login, use_auth};
use crate::components::icons::Wallet;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_loading = move || auth_ctx.state.get().is_loading;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match login(&auth_ctx, username.get_untracked(), password.get_untracked()).await {
                Ok(()) => {
                    router.navigate("/dashboard");
                }
                Err(e) => {
                    set_error_msg.set(Some(e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Wallet attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Investment Portfolio Tracker"</h1>
                            <p class="text-base-content/70">
                                "Sign in to manage your investments"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="username">
                                    <span class="label-text">"Username"</span>
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="your username"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                    } else {
                                        "Sign In".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-sm text-center mt-2 text-base-content/70">
                                "No account yet? "
                                <a class="link link-primary" on:click=move |_| router.navigate("/register")>
                                    "Register"
                                </a>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
