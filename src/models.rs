//! 后端 JSON 协议的领域模型
//!
//! 字段名与后端一致（camelCase），金额为 JSON number，
//! 交易时间为后端预格式化的 `yyyy-MM-dd HH:mm:ss` 字符串。

use serde::{Deserialize, Serialize};

// =========================================================
// 投资组合 (Portfolio)
// =========================================================

/// 单条持仓记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: i64,
    pub investment_product_id: i64,
    pub investment_product_name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub risk_level: String,
    pub units_owned: f64,
    pub avg_purchase_price: f64,
    #[serde(rename = "currentNAV")]
    pub current_nav: f64,
    pub invested_value: f64,
    pub current_value: f64,
    pub absolute_return: f64,
    pub percentage_return: f64,
}

/// `GET /portfolio` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub holdings: Vec<PortfolioItem>,
    pub total_invested_value: f64,
    pub total_current_value: f64,
}

/// `GET /portfolio/summary` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested_value: f64,
    pub total_current_value: f64,
    pub total_returns: f64,
    pub percentage_return: f64,
    pub holdings_count: u32,
}

/// 按投资类型划分的资产占比
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    #[serde(rename = "type")]
    pub investment_type: String,
    pub current_value: f64,
    pub percentage: f64,
}

/// `GET /portfolio/allocation` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    pub allocations: Vec<AllocationSlice>,
}

/// 单条持仓的收益情况
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainEntry {
    pub investment_product_name: String,
    pub invested_value: f64,
    pub current_value: f64,
    pub absolute_return: f64,
    pub percentage_return: f64,
}

/// `GET /portfolio/gains` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsResponse {
    pub gains: Vec<GainEntry>,
}

// =========================================================
// 交易 (Transactions)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

/// 单条交易记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: i64,
    pub investment_product_name: String,
    pub txn_type: TransactionType,
    pub units: f64,
    pub nav_at_txn: f64,
    pub amount: f64,
    /// 后端已格式化为 `yyyy-MM-dd HH:mm:ss`
    pub txn_date: String,
}

/// `GET /portfolio/transactions` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryResponse {
    pub transactions: Vec<TransactionRecord>,
}

// =========================================================
// 买入 / 卖出 (Trade Requests)
// =========================================================

/// `POST /portfolio/buy` 的请求体
///
/// 本层不做任何校验，金额与单位由后端检查。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyInvestmentRequest {
    pub investment_product_id: i64,
    pub units: f64,
}

/// `POST /portfolio/sell` 的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellInvestmentRequest {
    pub investment_product_id: i64,
    pub units: f64,
}

// =========================================================
// 产品目录 (Investment Products)
// =========================================================

/// 可投资产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentProduct {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub risk_level: String,
    pub minimum_investment: f64,
    pub expected_annual_return_rate: f64,
    pub current_net_asset_value_per_unit: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
}

// =========================================================
// 认证 (Auth)
// =========================================================

/// `POST /auth/login` 的请求体；响应为裸 token 字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/register` 的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_response_matches_backend_json() {
        // 后端 Jackson 序列化的真实形状
        let json = r#"{
            "holdings": [{
                "id": 11,
                "investmentProductId": 3,
                "investmentProductName": "Bluechip Equity Fund",
                "type": "MUTUAL_FUND",
                "riskLevel": "HIGH",
                "unitsOwned": 12.5,
                "avgPurchasePrice": 104.20,
                "currentNAV": 110.00,
                "investedValue": 1302.50,
                "currentValue": 1375.00,
                "absoluteReturn": 72.50,
                "percentageReturn": 5.57
            }],
            "totalInvestedValue": 1302.50,
            "totalCurrentValue": 1375.00
        }"#;

        let parsed: PortfolioResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.holdings.len(), 1);
        let item = &parsed.holdings[0];
        assert_eq!(item.investment_product_id, 3);
        assert_eq!(item.product_type, "MUTUAL_FUND");
        assert_eq!(item.current_nav, 110.00);
        assert_eq!(parsed.total_current_value, 1375.00);
    }

    #[test]
    fn test_transaction_record_parses_txn_type_and_date() {
        let json = r#"{
            "transactions": [{
                "id": 7,
                "investmentProductName": "Govt Bond Fund",
                "txnType": "SELL",
                "units": 4.0,
                "navAtTxn": 52.10,
                "amount": 208.40,
                "txnDate": "2025-05-14 10:23:45"
            }]
        }"#;

        let parsed: TransactionHistoryResponse = serde_json::from_str(json).unwrap();
        let txn = &parsed.transactions[0];
        assert_eq!(txn.txn_type, TransactionType::Sell);
        assert_eq!(txn.txn_date, "2025-05-14 10:23:45");
    }

    #[test]
    fn test_buy_request_serializes_camel_case() {
        let req = BuyInvestmentRequest {
            investment_product_id: 42,
            units: 2.5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["investmentProductId"], 42);
        assert_eq!(json["units"], 2.5);
    }
}
