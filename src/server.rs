//! HTTP query endpoint
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | /api/search?q= | Up to ten suggestions matching `q` |
//! | GET | /health | Health check |
//!
//! The search route never fails: a missing, blank or unparsable query
//! string is answered with an empty array.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::error::TypeaheadError;
use crate::query::QueryService;
use crate::suggestion::Suggestion;

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /api/search
pub async fn search(
    State(service): State<QueryService>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<Vec<Suggestion>> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            log::debug!("Treating malformed query string as empty: {}", rejection);
            SearchParams::default()
        }
    };

    let results = service.search(params.q.as_deref());
    log::debug!("search q={:?} -> {} results", params.q, results.len());
    Json(results)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn create_router(service: QueryService) -> Router {
    Router::new()
        .route(SEARCH_PATH, get(search))
        .route("/health", get(health))
        .with_state(service)
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_with_shutdown(
    listener: TcpListener,
    service: QueryService,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), TypeaheadError> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Query endpoint listening on http://{}{}", addr, SEARCH_PATH);
    }

    axum::serve(listener, create_router(service))
        .with_graceful_shutdown(shutdown)
        .await?;

    log::info!("Query endpoint stopped");
    Ok(())
}

/// Bind `addr` and serve until Ctrl+C
pub async fn run(addr: &str, service: QueryService) -> Result<(), TypeaheadError> {
    let listener = TcpListener::bind(addr).await?;
    serve_with_shutdown(listener, service, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
