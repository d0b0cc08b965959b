// ABOUTME: Request body extraction for record-creating routes
// ABOUTME: Maps axum JSON rejections onto the application error format

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use workout_core::errors::AppError;

/// Unwrap a JSON body, turning a syntax or content-type failure into a 400
///
/// The value is left untyped; schema checks happen afterwards so that every
/// violated field can be reported at once.
///
/// # Errors
///
/// Returns [`AppError::invalid_format`] when axum rejected the body
pub fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_format(rejection.body_text()))
}
