// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Names the request ID header and builds the span every HTTP request runs in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use http::header::HeaderName;
use http::Request;
use tracing::Span;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID header as a typed name
#[must_use]
pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Create the span an HTTP request is traced in
///
/// The request ID is set by an outer layer, so it is always present here
/// unless the layer stack is assembled differently.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
