//! Yahoo Finance chart-endpoint quote provider.
//!
//! Issues plain GETs against the public v8 chart endpoint and extracts the
//! daily closing-price series. No authentication is required; the endpoint
//! only expects a browser-style User-Agent.

mod models;

use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::provider::{DailySeries, QuoteProvider};

use models::ChartResponse;

const YCHART_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Yahoo Finance quote provider.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Create a provider against the public Yahoo endpoint.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(YCHART_URL)
    }

    /// Create a provider against a custom base URL (stub upstreams, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(MarketDataError::Network)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn chart_url(&self, query_symbol: &str, range_days: u32) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}d&interval=1d",
            self.base_url,
            encode(query_symbol),
            range_days
        )
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn daily_closes(
        &self,
        query_symbol: &str,
        range_days: u32,
    ) -> Result<DailySeries, MarketDataError> {
        let url = self.chart_url(query_symbol, range_days);
        debug!("Fetching daily closes for {} from Yahoo", query_symbol);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: self.id().to_string(),
                message: format!("{}", status),
            });
        }

        let data: ChartResponse = response.json().await?;

        if let Some(error) = data.chart.error {
            return Err(MarketDataError::ProviderError {
                provider: self.id().to_string(),
                message: format!("{} - {}", error.code, error.description),
            });
        }

        let result = data
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::MalformedPayload {
                symbol: query_symbol.to_string(),
                message: "missing chart result".to_string(),
            })?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::MalformedPayload {
                symbol: query_symbol.to_string(),
                message: "missing quote block".to_string(),
            })?;

        Ok(DailySeries {
            timestamps: result.timestamp.unwrap_or_default(),
            closes: quote.close,
        })
    }
}
