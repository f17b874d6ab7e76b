//! Wire-level data shapes shared between the fetcher and the scorer.
//!
//! A snapshot serializes as a JSON object keyed by symbol, each value a
//! single-entry mapping from ISO date to percent return:
//!
//! ```json
//! { "SPY": { "2024-01-01": 2.0 }, "VIX": { "2024-01-01": -1.3 } }
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// A single-entry mapping from calendar date to day-over-day percent return.
///
/// Invariant: exactly one date key per symbol per fetch cycle.
pub type DailyReturn = BTreeMap<NaiveDate, f64>;

/// Mapping from symbol to its daily return.
///
/// Keys are exactly the fixed symbol universe, with no omissions: a failed
/// fetch still produces an entry with return 0. BTreeMap keeps iteration
/// order deterministic for indicator packaging.
pub type MarketSnapshot = BTreeMap<String, DailyReturn>;

/// Build the single-entry return mapping for one symbol.
pub fn single_return(date: NaiveDate, percent: f64) -> DailyReturn {
    let mut returns = DailyReturn::new();
    returns.insert(date, percent);
    returns
}

/// Extract the return value from a [`DailyReturn`].
///
/// There is exactly one date key; take its value, defaulting to 0 when the
/// mapping is unexpectedly empty.
pub fn latest_return(returns: &DailyReturn) -> f64 {
    returns.values().next().copied().unwrap_or(0.0)
}
