//! Quote provider trait definition and the daily price series it returns.

use async_trait::async_trait;

use crate::errors::MarketDataError;

/// A run of daily closing prices as returned by the chart endpoint.
///
/// `timestamps` and `closes` are parallel arrays; close entries may be null
/// for non-trading days. The arrays are ordered oldest first.
#[derive(Clone, Debug, Default)]
pub struct DailySeries {
    /// Unix timestamps (seconds) for each bar.
    pub timestamps: Vec<i64>,
    /// Closing prices; `None` marks a non-trading day.
    pub closes: Vec<Option<f64>>,
}

/// A non-null closing price together with its upstream timestamp, when one
/// was present at the same index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidClose {
    /// Unix timestamp of the bar, if the timestamp array covered it.
    pub timestamp: Option<i64>,
    /// The closing price.
    pub price: f64,
}

impl DailySeries {
    /// Scan from the most recent entry backward and collect the first two
    /// non-null closes.
    ///
    /// Returns `(prev, last)` where `last` is the most recent valid close,
    /// or `None` when fewer than two valid closes exist.
    pub fn last_two_valid(&self) -> Option<(ValidClose, ValidClose)> {
        let mut last: Option<ValidClose> = None;

        for (i, close) in self.closes.iter().enumerate().rev() {
            let Some(price) = close else { continue };
            let point = ValidClose {
                timestamp: self.timestamps.get(i).copied(),
                price: *price,
            };
            match last {
                None => last = Some(point),
                Some(last) => return Some((point, last)),
            }
        }

        None
    }
}

/// Trait for upstream quote providers.
///
/// Implement this trait to add support for a new quote source. The snapshot
/// fetcher resolves the query alias before calling in, so implementations
/// only see upstream-ready symbols.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the last `range_days` days of daily-interval closing prices
    /// for a query symbol.
    async fn daily_closes(
        &self,
        query_symbol: &str,
        range_days: u32,
    ) -> Result<DailySeries, MarketDataError>;
}
