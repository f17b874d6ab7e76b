use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use tower::ServiceExt;

use riskpulse_market_data::{
    DailySeries, MarketDataError, QuoteProvider, SnapshotFetcher, UNIVERSE,
};
use riskpulse_server::{api::app_router, config::Config, AppState};

/// Stub upstream: every symbol moved from 100.0 to 102.0 (a +2% day).
struct FlatUpProvider;

#[async_trait]
impl QuoteProvider for FlatUpProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn daily_closes(
        &self,
        _query_symbol: &str,
        _range_days: u32,
    ) -> Result<DailySeries, MarketDataError> {
        Ok(DailySeries {
            timestamps: vec![1704067200, 1704153600],
            closes: vec![Some(100.0), Some(102.0)],
        })
    }
}

/// Stub upstream that fails every request.
struct DownProvider;

#[async_trait]
impl QuoteProvider for DownProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn daily_closes(
        &self,
        query_symbol: &str,
        _range_days: u32,
    ) -> Result<DailySeries, MarketDataError> {
        Err(MarketDataError::MalformedPayload {
            symbol: query_symbol.to_string(),
            message: "missing chart result".to_string(),
        })
    }
}

/// Stub upstream whose failures are cycle-scoped, not per-symbol.
struct BrokenProvider;

#[async_trait]
impl QuoteProvider for BrokenProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn daily_closes(
        &self,
        _query_symbol: &str,
        _range_days: u32,
    ) -> Result<DailySeries, MarketDataError> {
        Err(MarketDataError::Internal {
            message: "clock went backwards".to_string(),
        })
    }
}

fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        static_dir: "dist".to_string(),
        quote_base_url: "http://127.0.0.1:9".to_string(),
        request_spacing: Duration::ZERO,
    }
}

fn app_with_config(provider: Arc<dyn QuoteProvider>, config: &Config) -> axum::Router {
    let fetcher = SnapshotFetcher::with_config(provider, UNIVERSE, Duration::ZERO);
    let state = Arc::new(AppState { fetcher });
    app_router(state, config)
}

fn app_with(provider: Arc<dyn QuoteProvider>) -> axum::Router {
    app_with_config(provider, &test_config())
}

async fn get_json(app: axum::Router, uri: &str) -> (u16, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_works() {
    let app = app_with(Arc::new(FlatUpProvider));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn market_data_returns_one_entry_per_symbol() {
    let (status, json) = get_json(app_with(Arc::new(FlatUpProvider)), "/api/v1/market-data").await;

    assert_eq!(status, 200);
    let snapshot = json.as_object().unwrap();
    assert_eq!(snapshot.len(), 8);
    for spec in UNIVERSE {
        let returns = snapshot[spec.symbol].as_object().unwrap();
        assert_eq!(returns.len(), 1);
        let pct = returns.values().next().unwrap().as_f64().unwrap();
        assert!((pct - 2.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn risk_assessment_scores_the_snapshot() {
    let (status, json) = get_json(app_with(Arc::new(FlatUpProvider)), "/api/v1/risk").await;

    assert_eq!(status, 200);
    let score = json["riskScore"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(json["indicators"].as_array().unwrap().len(), 8);
    assert_eq!(json["hourlyHistory"].as_array().unwrap().len(), 1);
    assert!(json["history"].as_array().unwrap().is_empty());

    // Every symbol is +2% -> value 70, except VIX which inverts to 30.
    for indicator in json["indicators"].as_array().unwrap() {
        let value = indicator["value"].as_f64().unwrap();
        if indicator["symbol"] == "VIX" {
            assert!((value - 30.0).abs() < 1e-9);
        } else {
            assert!((value - 70.0).abs() < 1e-9);
        }
    }
}

#[tokio::test]
async fn cycle_failure_answers_bad_gateway_with_error_body() {
    let (status, json) = get_json(app_with(Arc::new(BrokenProvider)), "/api/v1/market-data").await;

    assert_eq!(status, 502);
    assert_eq!(json["code"], 502);
    assert!(json["message"].as_str().unwrap().contains("Internal error"));
    // No partial snapshot leaks into the error body.
    assert!(json.get("SPY").is_none());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_static_bundle() {
    let dir = std::env::temp_dir().join("riskpulse-static-route-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();

    let mut config = test_config();
    config.static_dir = dir.to_str().unwrap().to_string();
    let app = app_with_config(Arc::new(FlatUpProvider), &config);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("dashboard"));
}

#[tokio::test]
async fn upstream_failures_degrade_to_zero_returns() {
    let (status, json) = get_json(app_with(Arc::new(DownProvider)), "/api/v1/market-data").await;

    // Per-symbol failures never fail the cycle.
    assert_eq!(status, 200);
    let snapshot = json.as_object().unwrap();
    assert_eq!(snapshot.len(), 8);
    for returns in snapshot.values() {
        let pct = returns.as_object().unwrap().values().next().unwrap();
        assert_eq!(pct.as_f64().unwrap(), 0.0);
    }
}
