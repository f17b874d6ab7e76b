use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use riskpulse_market_data::{SnapshotFetcher, YahooProvider, UNIVERSE};

use crate::config::Config;

pub struct AppState {
    pub fetcher: SnapshotFetcher,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::with_base_url(&config.quote_base_url)?);
    let fetcher = SnapshotFetcher::with_config(provider, UNIVERSE, config.request_spacing);
    Ok(Arc::new(AppState { fetcher }))
}
