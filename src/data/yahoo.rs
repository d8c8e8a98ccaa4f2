use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::MarketDataConfig;
use crate::constants::market_data::USER_AGENT;
use crate::error::ToolError;

/// Minimal client for Yahoo Finance's public chart endpoint.
#[derive(Clone)]
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    pub fn new(config: &MarketDataConfig) -> Result<Self, ToolError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chart endpoint for `symbol`, which is encoded as a single path segment.
    pub fn chart_url(&self, symbol: &str) -> Result<Url, ToolError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ToolError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ToolError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }

    pub async fn get_current_price(&self, symbol: &str) -> Result<f64, ToolError> {
        let url = self.chart_url(symbol)?;
        debug!("Fetching chart for {} from {}", symbol, url);

        let resp = self
            .client
            .get(url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ToolError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = resp.json().await?;
        extract_market_price(&data).ok_or_else(|| ToolError::PriceUnavailable {
            symbol: symbol.to_string(),
        })
    }
}

/// Price from a chart response: `regularMarketPrice`, else `previousClose`.
pub fn extract_market_price(body: &Value) -> Option<f64> {
    let meta = body.pointer("/chart/result/0/meta")?;
    meta.get("regularMarketPrice")
        .and_then(Value::as_f64)
        .or_else(|| meta.get("previousClose").and_then(Value::as_f64))
}
