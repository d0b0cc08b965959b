// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Allows any origin, method, and header so browser clients can call the API directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Configure CORS for the API
///
/// Every origin, method, and request header is permitted. Credentials are
/// not allowed, since browsers refuse a wildcard origin combined with them.
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
}
