//! HTTP API
//!
//! Provides REST endpoints for:
//! - Text analysis (`POST /analyze`)
//! - Keyword insertion (`POST /insert-keyword`)
//!
//! Both are also served under `/api`.

use anyhow::Result;
use axum::{
    http::Request,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

mod error;
mod handlers;
mod state;


pub use state::AppState;

/// Build the router with all routes and middleware
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route(
            "/insert-keyword",
            post(handlers::insert_keyword)
                .layer(CatchPanicLayer::custom(error::insertion_panic_response)),
        );

    // The front-end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %Uuid::new_v4(),
        )
    });

    Router::new()
        .route("/", get(handlers::health))
        .merge(api.clone())
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

/// Serve the API until the process is stopped
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting seolens API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
