use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Base URL of the upstream quote endpoint.
    pub quote_base_url: String,
    /// Spacing between consecutive upstream requests.
    pub request_spacing: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("RISK_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid RISK_LISTEN_ADDR");
        let cors_allow = std::env::var("RISK_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("RISK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("RISK_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let quote_base_url = std::env::var("RISK_QUOTE_URL")
            .unwrap_or_else(|_| "https://query1.finance.yahoo.com".into());
        let spacing_ms: u64 = std::env::var("RISK_REQUEST_SPACING_MS")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .unwrap_or(100);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            quote_base_url,
            request_spacing: Duration::from_millis(spacing_ms),
        }
    }
}
