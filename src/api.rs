use gloo_net::http::Request;

use crate::auth::TOKEN_STORAGE_KEY;
use crate::models::{
    AllocationResponse, BuyInvestmentRequest, GainsResponse, InvestmentProduct, LoginRequest,
    PortfolioItem, PortfolioResponse, PortfolioSummary, RegisterRequest, SellInvestmentRequest,
    TransactionHistoryResponse,
};
use crate::web::LocalStorage;

/// 后端地址，构建时通过环境变量注入；默认对应本地 Spring 后端
const BACKEND_URL: &str = match option_env!("BACKEND_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// 组装 Authorization 头的值
///
/// 有 token 时为 `Bearer <token>`，没有时为空字符串（与后端约定一致）。
fn bearer_value(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("Bearer {}", token),
        None => String::new(),
    }
}

/// 每次请求时从 LocalStorage 读取凭证，登录/登出立即生效
fn auth_header() -> (&'static str, String) {
    let token = LocalStorage::get(TOKEN_STORAGE_KEY);
    ("Authorization", bearer_value(token.as_deref()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioApi {
    pub base_url: String,
}

impl Default for PortfolioApi {
    fn default() -> Self {
        Self::new(BACKEND_URL.to_string())
    }
}

impl PortfolioApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<T, String> {
        let url = self.url(path);
        let (key, value) = auth_header();
        let res = Request::get(&url)
            .header(key, &value)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to load {}: {}", what, res.status()));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    /// 获取资产配置占比
    pub async fn get_allocation(&self) -> Result<AllocationResponse, String> {
        self.get_json("/portfolio/allocation", "allocation").await
    }

    /// 获取投资组合概要
    pub async fn get_summary(&self) -> Result<PortfolioSummary, String> {
        self.get_json("/portfolio/summary", "summary").await
    }

    /// 获取各持仓收益
    pub async fn get_gains(&self) -> Result<GainsResponse, String> {
        self.get_json("/portfolio/gains", "gains").await
    }

    /// 获取当前持仓
    pub async fn get_holdings(&self) -> Result<PortfolioResponse, String> {
        self.get_json("/portfolio", "holdings").await
    }

    /// 获取交易历史
    pub async fn get_transactions(&self) -> Result<TransactionHistoryResponse, String> {
        self.get_json("/portfolio/transactions", "transactions")
            .await
    }

    /// 获取可投资产品目录
    pub async fn get_products(&self) -> Result<Vec<InvestmentProduct>, String> {
        self.get_json("/investments", "products").await
    }

    /// 买入
    ///
    /// 请求体不做本地校验，最小投资额等规则由后端判定。
    pub async fn buy_investment(&self, req: &BuyInvestmentRequest) -> Result<PortfolioItem, String> {
        self.post_trade("/portfolio/buy", req, "Buy failed").await
    }

    /// 卖出
    pub async fn sell_investment(
        &self,
        req: &SellInvestmentRequest,
    ) -> Result<PortfolioItem, String> {
        self.post_trade("/portfolio/sell", req, "Sell failed").await
    }

    async fn post_trade<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        failure: &str,
    ) -> Result<PortfolioItem, String> {
        let url = self.url(path);
        let (key, value) = auth_header();
        let res = Request::post(&url)
            .header(key, &value)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            // 业务校验失败时后端把原因放在响应体里
            let detail = res.text().await.unwrap_or_default();
            if detail.is_empty() {
                return Err(format!("{}: {}", failure, res.status()));
            }
            return Err(format!("{}: {}", failure, detail));
        }

        res.json::<PortfolioItem>().await.map_err(|e| e.to_string())
    }
}

/// 认证接口客户端
///
/// 只负责网络调用；token 的保存与清除在 `auth` 模块完成。
#[derive(Clone, Debug, PartialEq)]
pub struct AuthApi {
    pub base_url: String,
}

impl Default for AuthApi {
    fn default() -> Self {
        Self::new(BACKEND_URL.to_string())
    }
}

impl AuthApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 登录，成功时返回后端签发的裸 token 字符串
    pub async fn login(&self, req: &LoginRequest) -> Result<String, String> {
        let url = self.url("/auth/login");
        let res = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Login failed: {}", res.status()));
        }

        res.text().await.map_err(|e| e.to_string())
    }

    /// 注册新用户
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), String> {
        let url = self.url("/auth/register");
        let res = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            let detail = res.text().await.unwrap_or_default();
            if detail.is_empty() {
                return Err(format!("Registration failed: {}", res.status()));
            }
            return Err(detail);
        }

        Ok(())
    }
}

// =========================================================
// 单元测试 (纯函数部分)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_value_with_and_without_token() {
        assert_eq!(bearer_value(Some("abc.def.ghi")), "Bearer abc.def.ghi");
        // 无 token 时按约定发送空字符串
        assert_eq!(bearer_value(None), "");
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let api = PortfolioApi::new("http://localhost:8080/".to_string());
        assert_eq!(
            api.url("/portfolio/allocation"),
            "http://localhost:8080/portfolio/allocation"
        );
        assert_eq!(api.url("portfolio"), "http://localhost:8080/portfolio");
    }

    #[test]
    fn test_auth_api_url_joining() {
        let api = AuthApi::new("https://api.example.com".to_string());
        assert_eq!(api.url("/auth/login"), "https://api.example.com/auth/login");
    }
}
