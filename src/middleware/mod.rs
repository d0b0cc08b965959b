// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides the CORS layer, request ID generation, and per-request spans

/// Cross-origin resource sharing
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, request_id_header, REQUEST_ID_HEADER};
