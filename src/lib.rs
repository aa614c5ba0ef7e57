//! 投资组合追踪器前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含导航守卫判定）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理（token 存于 LocalStorage）
//! - `api`: 后端 REST 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod buy_investment;
    pub mod dashboard;
    mod format;
    mod icons;
    pub mod investments;
    pub mod login;
    pub mod my_portfolio;
    mod navbar;
    pub mod register;
    pub mod sell_investment;
    pub mod transactions;
}
mod models;

use crate::auth::{AuthContext, init_auth};
use crate::components::buy_investment::BuyInvestmentPage;
use crate::components::dashboard::DashboardPage;
use crate::components::investments::InvestmentsPage;
use crate::components::login::LoginPage;
use crate::components::my_portfolio::MyPortfolioPage;
use crate::components::register::RegisterPage;
use crate::components::sell_investment::SellInvestmentPage;
use crate::components::transactions::TransactionsPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Investments => view! { <InvestmentsPage /> }.into_any(),
        AppRoute::MyPortfolio => view! { <MyPortfolioPage /> }.into_any(),
        AppRoute::Transactions => view! { <TransactionsPage /> }.into_any(),
        AppRoute::BuyInvestment(preselected) => {
            view! { <BuyInvestmentPage preselected=preselected /> }.into_any()
        }
        AppRoute::SellInvestment(id) => view! { <SellInvestmentPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复 token）
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
