//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: the main error enum for all market data operations
//! - [`FailureScope`]: classification that decides whether a failure is
//!   absorbed inside the per-symbol fetch loop or propagated to the caller

mod scope;

pub use scope::FailureScope;

use thiserror::Error;

/// Errors that can occur while fetching market data.
///
/// Each variant is classified into a [`FailureScope`] via the
/// [`scope`](Self::scope) method, which determines how the snapshot fetcher
/// handles the error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream service answered with a non-success status or an
    /// explicit error object for one symbol.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body did not contain the expected chart structure.
    #[error("Malformed payload for {symbol}: {message}")]
    MalformedPayload {
        /// The query symbol whose payload failed validation
        symbol: String,
        /// Description of the missing or invalid piece
        message: String,
    },

    /// Fewer than two valid closing prices were available, so no
    /// day-over-day return can be computed.
    #[error("Insufficient price history for {symbol}")]
    InsufficientPrices {
        /// The symbol with too few valid closes
        symbol: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An unexpected failure outside the per-symbol loop.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the failure
        message: String,
    },
}

impl MarketDataError {
    /// Returns the failure scope for this error.
    ///
    /// [`FailureScope::Symbol`] failures are recorded as a zero return for
    /// the affected symbol and never abort the fetch cycle.
    /// [`FailureScope::Cycle`] failures propagate to the caller and the
    /// whole snapshot is discarded.
    pub fn scope(&self) -> FailureScope {
        match self {
            Self::ProviderError { .. }
            | Self::MalformedPayload { .. }
            | Self::InsufficientPrices { .. }
            | Self::Network(_) => FailureScope::Symbol,

            Self::Internal { .. } => FailureScope::Cycle,
        }
    }
}
