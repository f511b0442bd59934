use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use coinfolio_core::market::{AssetDetail, MarketEntry};
use coinfolio_core::portfolio::PortfolioSummary;

use crate::{error::ApiResult, main_lib::AppState};

/// Overall request deadline, on top of the per-upstream-call timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Coinfolio API",
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
    }))
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    Ok(Json(state.portfolio_service.get_portfolio().await?))
}

async fn get_market_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MarketEntry>>> {
    Ok(Json(state.market_service.get_market_overview().await?))
}

async fn get_asset_detail(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AssetDetail>> {
    Ok(Json(state.market_service.get_asset_detail(&code).await?))
}

pub fn app_router(state: Arc<AppState>, cors_allow: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/market-data", get(get_market_data))
        .route("/api/asset/{code}", get(get_asset_detail))
        .layer(build_cors(cors_allow))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

fn build_cors(allow: &[String]) -> CorsLayer {
    if allow.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allow.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}
