//! Deserialization models for the Yahoo Finance v8 chart endpoint.
//!
//! Only the pieces the fetcher consumes are modeled: the result container,
//! the timestamp array and the nullable daily closes.

use serde::Deserialize;

/// Top-level chart response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    /// Absent when the upstream reports an error.
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Upstream error object, e.g. for an unknown symbol.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps (seconds); may be absent for empty ranges.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuote {
    /// Closing prices; null entries mark non-trading days.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
