//! Quote provider abstraction and implementations.
//!
//! The fetcher talks to the upstream quote service through the
//! [`QuoteProvider`] trait; [`yahoo::YahooProvider`] is the concrete
//! implementation over the Yahoo Finance chart endpoint.

mod traits;

pub mod yahoo;

pub use traits::{DailySeries, QuoteProvider, ValidClose};
