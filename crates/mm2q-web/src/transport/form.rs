//! HTML form handlers.
//!
//! A rejected submission re-renders the form in the same response with the
//! message and the user's raw values, instead of redirecting.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use mm2q_core::queue::{self, Outcome, UNSTABLE_MESSAGE};

use crate::app_state::AppState;
use crate::views::{self, Alert, AlertKind, Prefill};

/// Raw form body. Missing fields become empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct CalcForm {
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub service: String,
}

pub async fn index() -> Html<String> {
    let span = tracing::info_span!("form_index");
    span.in_scope(|| {
        tracing::debug!("render form");
        Html(views::render_index(None, Prefill::default()))
    })
}

pub async fn submit(
    State(app): State<AppState>,
    Form(form): Form<CalcForm>,
) -> (StatusCode, Html<String>) {
    let span = tracing::info_span!("form_submit");
    span.in_scope(|| handle(&app, &form))
}

fn handle(app: &AppState, form: &CalcForm) -> (StatusCode, Html<String>) {
    let prefill = Prefill {
        arrival: &form.arrival,
        service: &form.service,
    };

    let input = match queue::parse_pair(&form.arrival, &form.service) {
        Ok(p) => p,
        Err(e) => {
            let field = e.field().map(|f| f.as_str());
            tracing::info!(field = field.unwrap_or("-"), code = e.client_code().as_str(), "input rejected");
            let message = e.to_string();
            let alert = Alert {
                kind: AlertKind::Error,
                message: &message,
                field,
            };
            return (StatusCode::BAD_REQUEST, Html(views::render_index(Some(alert), prefill)));
        }
    };

    match queue::compute(input) {
        Outcome::Stable(m) => {
            tracing::info!(
                arrival_rate = m.arrival_rate,
                service_rate = m.service_rate,
                utilization = m.utilization,
                "stable"
            );
            (StatusCode::OK, Html(views::render_result(&m, app.precision())))
        }
        Outcome::Unstable => {
            tracing::info!(
                arrival_time = input.arrival_time(),
                service_time = input.service_time(),
                "unstable"
            );
            let alert = Alert {
                kind: AlertKind::Warning,
                message: UNSTABLE_MESSAGE,
                field: None,
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::render_index(Some(alert), prefill)),
            )
        }
    }
}
