use crate::auth::register;
use crate::components::icons::UserPlus;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (done, set_done) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match register(
                username.get_untracked(),
                password.get_untracked(),
                email.get_untracked(),
            )
            .await
            {
                Ok(()) => set_done.set(true),
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <UserPlus attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Create your account"</h1>
                        <p class="text-base-content/70">
                            "Start tracking your portfolio in minutes"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || !done.get()
                        fallback=move || view! {
                            <div class="card-body items-center text-center">
                                <div role="alert" class="alert alert-success">
                                    <span>"Account created. You can sign in now."</span>
                                </div>
                                <button
                                    class="btn btn-primary mt-4"
                                    on:click=move |_| router.navigate("/login")
                                >
                                    "Go to Sign In"
                                </button>
                            </div>
                        }
                    >
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="reg-username">
                                    <span class="label-text">"Username"</span>
                                </label>
                                <input
                                    id="reg-username"
                                    type="text"
                                    placeholder="choose a username"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reg-email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="reg-email"
                                    type="email"
                                    placeholder="you@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reg-password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="reg-password"
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
                                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                    } else {
                                        "Create Account".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-sm text-center mt-2 text-base-content/70">
                                "Already registered? "
                                <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                    "Sign in"
                                </a>
                            </p>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
