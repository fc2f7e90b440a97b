//! Axum router wiring.
//!
//! - `/`            : HTML form (GET) and submission (POST)
//! - `/v1/compute`  : JSON API
//! - `/healthz`     : liveness

use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().server.body_limit_bytes;

    Router::new()
        .route("/", get(transport::form::index).post(transport::form::submit))
        .route("/v1/compute", post(transport::api::compute))
        .route("/healthz", get(ops::healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
