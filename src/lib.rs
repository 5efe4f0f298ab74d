pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod payments;
pub mod seed;
pub mod util;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::AppState;

/// Build the full application router: every route group, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::public::router())
        .merge(handlers::members::router(state.clone()))
        .merge(handlers::admin::router(state.clone()))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
