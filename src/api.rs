//! Wire types and the data-access seam for the funds backend.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::sort::{FieldValue, Sortable};

/// Profitability metrics a fund may report. All windows are optional;
/// newly listed funds often carry none of the longer ones.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profitability {
    #[serde(rename = "YTD", default)]
    pub ytd: Option<f64>,
    #[serde(default)]
    pub one_year: Option<f64>,
    #[serde(default)]
    pub three_years: Option<f64>,
    #[serde(default)]
    pub five_years: Option<f64>,
}

/// An investable fund as served by `GET /api/funds`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub isin: String,
    pub category: String,
    pub currency: String,
    /// Unit price in the fund's own currency.
    pub value: f64,
    pub div: String,
    #[serde(default)]
    pub profitability: Option<Profitability>,
    pub ter: String,
    pub risk_level: String,
}

/// A held position referencing a fund by id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: f64,
    pub total_value: f64,
}

/// A buy order for `quantity` units of the fund identified by `fund_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyOrder {
    pub fund_id: String,
    pub quantity: f64,
}

/// Sortable columns of the funds table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FundSortKey {
    Name,
    Currency,
    Div,
    Category,
    Value,
    Ytd,
    OneYear,
    ThreeYears,
    FiveYears,
    Ter,
    RiskLevel,
}

impl Sortable for Fund {
    type Key = FundSortKey;

    fn field(&self, key: FundSortKey) -> FieldValue<'_> {
        let profitability = |metric: fn(&Profitability) -> Option<f64>| {
            self.profitability
                .as_ref()
                .and_then(metric)
                .map_or(FieldValue::Missing, FieldValue::Num)
        };

        match key {
            FundSortKey::Name => self
                .name
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Str),
            FundSortKey::Currency => FieldValue::Str(&self.currency),
            FundSortKey::Div => FieldValue::Str(&self.div),
            FundSortKey::Category => FieldValue::Str(&self.category),
            FundSortKey::Value => FieldValue::Num(self.value),
            FundSortKey::Ytd => profitability(|p| p.ytd),
            FundSortKey::OneYear => profitability(|p| p.one_year),
            FundSortKey::ThreeYears => profitability(|p| p.three_years),
            FundSortKey::FiveYears => profitability(|p| p.five_years),
            FundSortKey::Ter => FieldValue::Str(&self.ter),
            FundSortKey::RiskLevel => FieldValue::Str(&self.risk_level),
        }
    }
}

/// Data-access boundary to the funds backend.
#[async_trait]
pub trait FundsApi {
    async fn fetch_funds(&self) -> Result<Vec<Fund>>;
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioItem>>;
    async fn submit_buy(&self, order: &BuyOrder) -> Result<()>;
}
