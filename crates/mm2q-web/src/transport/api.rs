//! JSON API (`POST /v1/compute`).
//!
//! Every failure, including a body axum cannot decode, answers 400 with the
//! `{error, field, message}` shape. 422 is reserved for `Outcome::Unstable`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use mm2q_core::error::{ClientCode, Mm2Error};
use mm2q_core::queue::{self, Field, Outcome, UNSTABLE_MESSAGE};

/// Request body. Each value may be a JSON string or number; absent or null
/// counts as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    pub arrival: Value,
    #[serde(default)]
    pub service: Value,
}

/// Turn one JSON value into the raw text `parse_pair` expects.
fn raw_text(field: Field, v: &Value) -> Result<String, Mm2Error> {
    match v {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(Mm2Error::NonNumericInput(field))
        }
    }
}

fn error_response(e: &Mm2Error) -> Response {
    let body = Json(json!({
        "error": e.client_code().as_str(),
        "field": e.field().map(|f| f.as_str()),
        "message": e.to_string(),
    }));
    (StatusCode::BAD_REQUEST, body).into_response()
}

pub async fn compute(payload: Result<Json<ComputeRequest>, JsonRejection>) -> Response {
    let span = tracing::info_span!("api_compute");
    span.in_scope(|| {
        let req = match payload {
            Ok(Json(req)) => req,
            Err(rejection) => {
                let e = Mm2Error::BadRequest(rejection.body_text());
                tracing::info!(status = %rejection.status(), "body rejected");
                return error_response(&e);
            }
        };

        let input = raw_text(Field::Arrival, &req.arrival)
            .and_then(|arrival| {
                let service = raw_text(Field::Service, &req.service)?;
                queue::parse_pair(&arrival, &service)
            });
        let input = match input {
            Ok(p) => p,
            Err(e) => {
                tracing::info!(code = e.client_code().as_str(), "input rejected");
                return error_response(&e);
            }
        };

        match queue::compute(input) {
            Outcome::Stable(m) => {
                tracing::info!(utilization = m.utilization, "stable");
                (StatusCode::OK, Json(json!({ "status": "stable", "metrics": m }))).into_response()
            }
            Outcome::Unstable => {
                tracing::info!("unstable");
                let body = Json(json!({
                    "status": "unstable",
                    "code": ClientCode::UnstableSystem.as_str(),
                    "message": UNSTABLE_MESSAGE,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    })
}
