//! Response envelopes shared by the badge endpoint.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hitbadge_core::error::HitBadgeError;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

fn common_headers(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    resp
}

/// 200 with SVG body.
pub fn svg(markup: String) -> Response {
    let resp = (StatusCode::OK, [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], markup);
    common_headers(resp.into_response())
}

/// JSON `{"error": ...}` with the status mapped from the error's client code.
pub fn error(err: &HitBadgeError) -> Response {
    let status = StatusCode::from_u16(err.client_code().http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = Json(json!({ "error": err.public_message() }));
    common_headers((status, body).into_response())
}
