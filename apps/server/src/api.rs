use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use riskpulse_core::{score_snapshot, RiskAssessment};
use riskpulse_market_data::MarketSnapshot;

use crate::{config::Config, error::ApiResult, main_lib::AppState};

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

/// Run one fetch cycle and return the raw snapshot, keyed by symbol.
async fn get_market_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<MarketSnapshot>> {
    let snapshot = state.fetcher.fetch_snapshot().await?;
    Ok(Json(snapshot))
}

/// Run one fetch cycle and score it into the display-facing assessment.
async fn get_risk_assessment(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RiskAssessment>> {
    let snapshot = state.fetcher.fetch_snapshot().await?;
    Ok(Json(score_snapshot(&snapshot)))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/market-data", get(get_market_data))
        .route("/risk", get(get_risk_assessment));

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
