pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::classification::handlers as classification;
use crate::improvement::handlers as improvement;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/analyze-behavior",
            post(classification::handle_analyze_behavior),
        )
        .route(
            "/technicalanalysis",
            post(classification::handle_technical_analysis),
        )
        .route("/improvement", post(improvement::handle_improvement))
        .with_state(state)
}

/// Full application: routes plus request tracing and any-origin CORS.
pub fn app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
