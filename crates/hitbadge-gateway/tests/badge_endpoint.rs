#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::Response,
};

use common::RecordingStore;
use hitbadge_gateway::{
    app_state::AppState, config::GatewayConfig, http::hit, ops, router::build_router,
    store::CounterStore,
};

fn state_with(store: Arc<RecordingStore>) -> AppState {
    AppState::new(GatewayConfig::default(), store)
}

async fn call(state: &AppState, path: &str, params: &[(&str, &str)]) -> Response {
    let query: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    hit(State(state.clone()), path.parse::<Uri>().unwrap(), Query(query)).await
}

async fn body(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_of<'a>(resp: &'a Response, name: header::HeaderName) -> &'a str {
    resp.headers().get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn first_hit_renders_svg_with_fixed_headers() {
    let store = Arc::new(RecordingStore::new());
    let state = state_with(store.clone());

    let resp = call(&state, "/my/Repo/", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), "image/svg+xml");
    assert_eq!(header_of(&resp, header::CACHE_CONTROL), "no-cache");
    assert_eq!(header_of(&resp, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let svg = body(resp).await;
    assert!(svg.contains(r#"aria-label="Total Hits: 1""#));
    assert_eq!(store.get("/my/repo").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn start_seeds_the_first_hit() {
    let state = state_with(Arc::new(RecordingStore::new()));
    let svg = body(call(&state, "/seeded", &[("start", "41")]).await).await;
    assert!(svg.contains(r#"aria-label="Total Hits: 42""#));
}

#[tokio::test]
async fn blank_start_counts_from_zero() {
    let store = Arc::new(RecordingStore::new());
    let state = state_with(store.clone());

    let resp = call(&state, "/blank", &[("start", "")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body(resp).await.contains(r#"aria-label="Total Hits: 1""#));
    assert_eq!(store.puts(), 1);
}

#[tokio::test]
async fn start_with_leading_space_is_accepted() {
    // `start=+41` decodes to " 41".
    let state = state_with(Arc::new(RecordingStore::new()));
    let resp = call(&state, "/spaced", &[("start", " 41")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body(resp).await.contains(r#"aria-label="Total Hits: 42""#));
}

#[tokio::test]
async fn invalid_start_is_a_client_error_without_write() {
    let store = Arc::new(RecordingStore::new());
    let state = state_with(store.clone());

    let resp = call(&state, "/fresh", &[("start", "notanumber")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), "application/json");
    assert_eq!(header_of(&resp, header::CACHE_CONTROL), "no-cache");
    assert_eq!(header_of(&resp, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let json: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("notanumber"));
    assert_eq!(store.puts(), 0);
}

#[tokio::test]
async fn add_changes_message_but_not_the_stored_count() {
    let store = Arc::new(RecordingStore::new());
    let state = state_with(store.clone());

    let svg = body(call(&state, "/delta", &[("start", "9"), ("add", "5")]).await).await;
    assert!(svg.contains(r#"aria-label="Total Hits: 15""#));
    assert_eq!(store.get("/delta").await.unwrap().as_deref(), Some("10"));

    let svg = body(call(&state, "/delta", &[]).await).await;
    assert!(svg.contains(r#"aria-label="Total Hits: 11""#));
}

#[tokio::test]
async fn malformed_links_fail_after_the_write() {
    let store = Arc::new(RecordingStore::new());
    let state = state_with(store.clone());

    let resp = call(&state, "/links", &[("links", "not-json")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = body(resp).await;
    assert!(!text.contains("<svg"));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("invalid links"));

    // The increment is durable even though no badge was produced.
    assert_eq!(store.get("/links").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn bogus_style_renders_plastic() {
    let state = state_with(Arc::new(RecordingStore::new()));
    let bogus = body(call(&state, "/s1", &[("style", "bogus")]).await).await;
    let plastic = body(call(&state, "/s2", &[("style", "plastic")]).await).await;
    assert_eq!(bogus, plastic);
}

#[tokio::test]
async fn logo_and_color_end_up_in_the_svg() {
    let state = state_with(Arc::new(RecordingStore::new()));
    let svg = body(
        call(
            &state,
            "/logo",
            &[("logo", "github"), ("logoColor", "#ffffff"), ("color", "brightgreen")],
        )
        .await,
    )
    .await;
    assert!(svg.contains("https://cdn.simpleicons.org/github?viewbox=auto&amp;color=ffffff"));
    assert!(svg.contains(r##"fill="#4c1""##));
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let state = state_with(Arc::new(RecordingStore::failing_get()));
    let resp = call(&state, "/down", &[]).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("kv read timed out"));

    let metrics = state.metrics();
    assert_eq!(metrics.hits.get(&[("outcome", "store_error")]), 1);
    assert_eq!(metrics.store_errors.get(&[("op", "get")]), 1);
}

#[tokio::test]
async fn internal_failure_hides_detail() {
    let store = Arc::new(RecordingStore::new());
    store.put("/broken", "not a number".into()).await.unwrap();
    let state = state_with(store);

    let resp = call(&state, "/broken", &[]).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();
    assert_eq!(json["error"], "Unknown error occurred");
}

#[tokio::test]
async fn outcomes_are_counted() {
    let state = state_with(Arc::new(RecordingStore::new()));
    call(&state, "/m", &[]).await;
    call(&state, "/m", &[]).await;
    call(&state, "/other", &[("start", "x")]).await;

    let metrics = state.metrics();
    assert_eq!(metrics.hits.get(&[("outcome", "ok")]), 2);
    assert_eq!(metrics.hits.get(&[("outcome", "bad_request")]), 1);
    let text = body(ops::metrics(State(state.clone())).await).await;
    assert!(text.contains("hitbadge_hits_total{outcome=\"ok\"} 2"));
}

#[tokio::test]
async fn router_builds_with_and_without_ops() {
    let state = state_with(Arc::new(RecordingStore::new()));
    let _ = build_router(state);

    let mut cfg = GatewayConfig::default();
    cfg.ops.enabled = false;
    let _ = build_router(AppState::new(cfg, Arc::new(RecordingStore::new())));
}
