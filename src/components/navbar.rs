use crate::auth::{logout, use_auth};
use crate::components::icons::{LineChart, LogOut};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// Top navigation shared by all authenticated pages.
#[component]
pub fn AppNavbar() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let nav_link = move |label: &'static str, route: AppRoute| {
        let path = route.to_path();
        let is_active = move || router.current_route().get() == route;
        view! {
            <li>
                <a
                    class=move || if is_active() { "active" } else { "" }
                    on:click=move |_| router.navigate(&path)
                >
                    {label}
                </a>
            </li>
        }
    };

    let on_logout = move |_| {
        // 路由服务监听认证信号，登出后自动跳回登录页
        logout(&auth_ctx);
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <LineChart attr:class="text-primary h-6 w-6" />
                <a
                    class="btn btn-ghost text-xl"
                    on:click=move |_| router.navigate("/dashboard")
                >
                    "Portfolio Tracker"
                </a>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1 hidden md:flex">
                    {nav_link("Dashboard", AppRoute::Dashboard)}
                    {nav_link("Investments", AppRoute::Investments)}
                    {nav_link("My Portfolio", AppRoute::MyPortfolio)}
                    {nav_link("Transactions", AppRoute::Transactions)}
                </ul>
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}
