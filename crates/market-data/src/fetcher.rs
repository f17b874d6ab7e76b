//! The per-cycle snapshot fetcher.
//!
//! One call to [`SnapshotFetcher::fetch_snapshot`] walks the symbol universe
//! strictly sequentially, throttling between upstream requests, and returns
//! a fresh [`MarketSnapshot`] with exactly one entry per symbol. A single
//! symbol's failure never aborts the cycle.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use tracing::{debug, warn};

use crate::errors::{FailureScope, MarketDataError};
use crate::models::{single_return, MarketSnapshot};
use crate::provider::QuoteProvider;
use crate::throttle::{Throttle, DEFAULT_REQUEST_SPACING};
use crate::universe::{SymbolSpec, UNIVERSE};

/// Number of daily bars requested upstream; two closes make one return.
const LOOKBACK_DAYS: u32 = 2;

/// Fetches one market snapshot per call.
pub struct SnapshotFetcher {
    provider: Arc<dyn QuoteProvider>,
    throttle: Throttle,
    universe: &'static [SymbolSpec],
}

impl SnapshotFetcher {
    /// Fetcher over the default universe with the default request spacing.
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self::with_config(provider, UNIVERSE, DEFAULT_REQUEST_SPACING)
    }

    /// Fetcher with a custom universe and request spacing.
    pub fn with_config(
        provider: Arc<dyn QuoteProvider>,
        universe: &'static [SymbolSpec],
        spacing: Duration,
    ) -> Self {
        Self {
            provider,
            throttle: Throttle::new(spacing),
            universe,
        }
    }

    /// Run one fetch cycle.
    ///
    /// Symbol-scoped failures are logged and recorded as a zero return under
    /// today's date; cycle-scoped failures propagate and the snapshot is
    /// discarded.
    pub async fn fetch_snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        let mut snapshot = MarketSnapshot::new();

        for spec in self.universe {
            self.throttle.pause().await;

            match self.day_change(spec).await {
                Ok((date, percent)) => {
                    debug!(
                        symbol = spec.symbol,
                        %date,
                        return_pct = percent,
                        "fetched daily return"
                    );
                    snapshot.insert(spec.symbol.to_string(), single_return(date, percent));
                }
                Err(error) if error.scope() == FailureScope::Symbol => {
                    warn!(
                        symbol = spec.symbol,
                        provider = self.provider.id(),
                        "fetch failed, recording zero return: {}",
                        error
                    );
                    snapshot.insert(
                        spec.symbol.to_string(),
                        single_return(Utc::now().date_naive(), 0.0),
                    );
                }
                Err(error) => return Err(error),
            }
        }

        Ok(snapshot)
    }

    /// Fetch one symbol's day-over-day percent return and its date.
    async fn day_change(&self, spec: &SymbolSpec) -> Result<(NaiveDate, f64), MarketDataError> {
        let series = self
            .provider
            .daily_closes(spec.query_symbol(), LOOKBACK_DAYS)
            .await?;

        let (prev, last) =
            series
                .last_two_valid()
                .ok_or_else(|| MarketDataError::InsufficientPrices {
                    symbol: spec.symbol.to_string(),
                })?;

        let percent = (last.price - prev.price) / prev.price * 100.0;

        // Date of the last valid close; today when the timestamp is unusable.
        let date = last
            .timestamp
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .map(|dt| dt.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive());

        Ok((date, percent))
    }
}
