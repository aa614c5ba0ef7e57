//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、路径解析以及导航守卫的判定规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 产品目录 (需要认证)
    Investments,
    /// 当前持仓 (需要认证)
    MyPortfolio,
    /// 交易历史 (需要认证)
    Transactions,
    /// 买入页面；`Some(id)` 表示通过 `/buy-investment/:id` 预选了产品
    BuyInvestment(Option<i64>),
    /// 卖出页面，`:id` 为持仓对应的产品 id
    SellInvestment(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `:id` 形式的参数绑定为数字；非数字的段落视为未注册路径。
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/" | "/dashboard" => Self::Dashboard,
            "/investments" => Self::Investments,
            "/myportfolio" => Self::MyPortfolio,
            "/transactions" => Self::Transactions,
            // 历史遗留路径，等价于未预选产品的买入页面
            "/BuyInvestment" => Self::BuyInvestment(None),
            _ => {
                if let Some(id) = path.strip_prefix("/buy-investment/") {
                    match id.parse::<i64>() {
                        Ok(id) => Self::BuyInvestment(Some(id)),
                        Err(_) => Self::NotFound,
                    }
                } else if let Some(id) = path.strip_prefix("/sell-investment/") {
                    match id.parse::<i64>() {
                        Ok(id) => Self::SellInvestment(id),
                        Err(_) => Self::NotFound,
                    }
                } else {
                    Self::NotFound
                }
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Investments => "/investments".to_string(),
            Self::MyPortfolio => "/myportfolio".to_string(),
            Self::Transactions => "/transactions".to_string(),
            Self::BuyInvestment(None) => "/BuyInvestment".to_string(),
            Self::BuyInvestment(Some(id)) => format!("/buy-investment/{}", id),
            Self::SellInvestment(id) => format!("/sell-investment/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 除登录、注册之外的所有注册路径都需要认证。
    /// NotFound 不参与守卫：未注册路径无论认证与否都渲染 404。
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（登录页与注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页/注册页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 守卫判定：给定目标路由与认证状态，返回实际应加载的路由
    ///
    /// 纯函数，重定向副作用由路由服务执行。
    pub fn resolve(target: Self, is_authenticated: bool) -> Self {
        if target.requires_auth() && !is_authenticated {
            return Self::auth_failure_redirect();
        }
        if target.should_redirect_when_authenticated() && is_authenticated {
            return Self::auth_success_redirect();
        }
        target
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 单元测试 (无需浏览器环境)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED_PATHS: &[&str] = &[
        "/",
        "/dashboard",
        "/investments",
        "/myportfolio",
        "/transactions",
        "/BuyInvestment",
        "/buy-investment/7",
        "/sell-investment/3",
    ];

    #[test]
    fn test_unauthenticated_is_redirected_to_login() {
        for path in PROTECTED_PATHS {
            let resolved = AppRoute::resolve(AppRoute::from_path(path), false);
            assert_eq!(resolved, AppRoute::Login, "path: {}", path);
        }
    }

    #[test]
    fn test_authenticated_leaves_public_pages() {
        for path in ["/login", "/register"] {
            let resolved = AppRoute::resolve(AppRoute::from_path(path), true);
            assert_eq!(resolved, AppRoute::Dashboard, "path: {}", path);
        }
    }

    #[test]
    fn test_authenticated_navigation_proceeds() {
        for path in PROTECTED_PATHS {
            let target = AppRoute::from_path(path);
            let resolved = AppRoute::resolve(target.clone(), true);
            assert_eq!(resolved, target, "path: {}", path);
        }
    }

    #[test]
    fn test_unauthenticated_reaches_public_pages() {
        assert_eq!(AppRoute::resolve(AppRoute::Login, false), AppRoute::Login);
        assert_eq!(
            AppRoute::resolve(AppRoute::Register, false),
            AppRoute::Register
        );
    }

    #[test]
    fn test_unregistered_path_is_not_found_regardless_of_auth() {
        for path in ["/nope", "/portfolio/extra", "/404"] {
            for is_auth in [false, true] {
                let resolved = AppRoute::resolve(AppRoute::from_path(path), is_auth);
                assert_eq!(resolved, AppRoute::NotFound, "path: {}", path);
            }
        }
    }

    #[test]
    fn test_id_params_bind_numerically() {
        assert_eq!(
            AppRoute::from_path("/buy-investment/42"),
            AppRoute::BuyInvestment(Some(42))
        );
        assert_eq!(
            AppRoute::from_path("/sell-investment/9"),
            AppRoute::SellInvestment(9)
        );
        // 非数字参数视为未注册路径
        assert_eq!(AppRoute::from_path("/buy-investment/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/sell-investment/"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::Investments,
            AppRoute::MyPortfolio,
            AppRoute::Transactions,
            AppRoute::BuyInvestment(None),
            AppRoute::BuyInvestment(Some(12)),
            AppRoute::SellInvestment(5),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_root_aliases_dashboard() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
    }
}
