//! Every handler runs inside a span named after its route.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
};
use tower::ServiceExt; // for `oneshot`
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{registry::LookupSpan, Layer};

use mm2q_web::{app_state::AppState, config::AppConfig, router};

/// Records the name of every span opened while installed.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl<S> Layer<S> for SpanNames
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name().to_string());
    }
}

async fn spans_for(req: Request<Body>) -> Vec<String> {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = router::build_router(AppState::new(AppConfig::default()));
    let _ = app.oneshot(req).await.unwrap();

    let out = names.0.lock().unwrap().clone();
    out
}

#[tokio::test]
async fn index_has_span() {
    let names = spans_for(Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert!(names.iter().any(|n| n == "form_index"), "{names:?}");
}

#[tokio::test]
async fn submit_has_span() {
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("arrival=5&service=4"))
        .unwrap();
    let names = spans_for(req).await;
    assert!(names.iter().any(|n| n == "form_submit"), "{names:?}");
}

#[tokio::test]
async fn api_has_span() {
    let req = Request::builder()
        .method("POST")
        .uri("/v1/compute")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"arrival":"5","service":"4"}"#))
        .unwrap();
    let names = spans_for(req).await;
    assert!(names.iter().any(|n| n == "api_compute"), "{names:?}");
}

#[tokio::test]
async fn healthz_has_span() {
    let names = spans_for(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await;
    assert!(names.iter().any(|n| n == "healthz"), "{names:?}");
}
