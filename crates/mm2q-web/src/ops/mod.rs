//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    tracing::info_span!("healthz").in_scope(|| (StatusCode::OK, "ok"))
}
