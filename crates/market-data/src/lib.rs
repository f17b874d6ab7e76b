//! RiskPulse market data crate.
//!
//! Fetches day-over-day percentage returns for a fixed universe of tickers
//! from the Yahoo Finance chart endpoint and packages them as a
//! [`MarketSnapshot`] for the risk scorer.
//!
//! # Overview
//!
//! - A [`universe`] of symbol records (query alias, weight, inversion flag)
//! - A [`QuoteProvider`] seam over the upstream chart endpoint
//! - A [`Throttle`] pacing consecutive upstream requests
//! - A [`SnapshotFetcher`] running one sequential fetch cycle per call
//!
//! Per-symbol failures are absorbed inside the fetch cycle and recorded as
//! zero returns; only cycle-scoped failures reach the caller.

pub mod errors;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod throttle;
pub mod universe;

pub use errors::{FailureScope, MarketDataError};
pub use fetcher::SnapshotFetcher;
pub use models::{latest_return, single_return, DailyReturn, MarketSnapshot};
pub use provider::yahoo::YahooProvider;
pub use provider::{DailySeries, QuoteProvider};
pub use throttle::{Throttle, DEFAULT_REQUEST_SPACING};
pub use universe::{SymbolSpec, DEFAULT_WEIGHT, UNIVERSE};
