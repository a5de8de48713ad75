//! Axum router wiring.
//!
//! Three routes over the metric service, wrapped by access logging and the
//! fixed per-request timeout.

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, middleware};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/update/:metric_type/:metric_name/:metric_value",
            post(api::update_metric),
        )
        .route("/value/:metric_type/:metric_name", get(api::metric_value))
        .route("/", get(api::index))
        // The last layer added is outermost: logging wraps the timeout so
        // timed-out requests still produce an access line.
        .layer(from_fn(middleware::request_timeout))
        .layer(from_fn(middleware::request_logging))
        .with_state(state)
}
