//! HTTP mapping for core errors

use crate::core::error::IshtarError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &IshtarError) -> StatusCode {
    if err.is_bad_request() {
        return StatusCode::BAD_REQUEST;
    }
    match err {
        IshtarError::ContentUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for IshtarError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
