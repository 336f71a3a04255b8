//! REST implementation of [`FundsApi`] over the backend HTTP contract.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::{BuyOrder, Fund, FundsApi, PortfolioItem};

// The backend paginates server-side; we request one large page and leave
// display pagination to the client.
const FUNDS_PAGE_LIMIT: u32 = 1000;

pub struct RestApi {
    base_url: String,
    client: reqwest::Client,
}

impl RestApi {
    pub fn new(base_url: &str) -> Self {
        RestApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct FundsResponse {
    data: Vec<Fund>,
}

#[derive(Deserialize, Debug)]
struct PortfolioResponse {
    data: Vec<PortfolioItem>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    error: String,
}

#[async_trait]
impl FundsApi for RestApi {
    #[instrument(skip(self))]
    async fn fetch_funds(&self) -> Result<Vec<Fund>> {
        let url = format!(
            "{}/api/funds?page=1&limit={FUNDS_PAGE_LIMIT}",
            self.base_url
        );
        debug!("Fetching funds from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch funds from {url}"))?
            .error_for_status()
            .context("Funds request failed")?;

        let body: FundsResponse = response
            .json()
            .await
            .context("Failed to parse funds response")?;
        debug!("Fetched {} funds", body.data.len());
        Ok(body.data)
    }

    #[instrument(skip(self))]
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioItem>> {
        let url = format!("{}/api/portfolio", self.base_url);
        debug!("Fetching portfolio from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch portfolio from {url}"))?
            .error_for_status()
            .context("Portfolio request failed")?;

        let body: PortfolioResponse = response
            .json()
            .await
            .context("Failed to parse portfolio response")?;
        debug!("Fetched {} positions", body.data.len());
        Ok(body.data)
    }

    #[instrument(skip(self, order), fields(fund_id = %order.fund_id))]
    async fn submit_buy(&self, order: &BuyOrder) -> Result<()> {
        let url = format!("{}/api/funds/{}/buy", self.base_url, order.fund_id);
        debug!(quantity = order.quantity, "Submitting buy order to {url}");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "quantity": order.quantity }))
            .send()
            .await
            .with_context(|| format!("Failed to submit buy order to {url}"))?;

        if response.status().is_success() {
            debug!("Buy order accepted");
            return Ok(());
        }

        // Error responses carry { "error": "..." }; surface that message
        // when present, otherwise fall back to the HTTP status.
        let status = response.status();
        let message = response
            .json::<ApiError>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("La compra falló con estado {status}"));
        bail!(message)
    }
}
