use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ServiceError;

/// Serialized descriptor of a failed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionInfo {
    /// Stable failure-kind code, derived from the error variant name.
    pub code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&ServiceError> for ExceptionInfo {
    fn from(error: &ServiceError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Uniform outcome of one intercepted service invocation.
///
/// A populated `exception` signals failure; an empty one signals success (or
/// an internal authorization denial the interceptor chose not to surface).
/// The payload is opaque to the interception layer.
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionInfo>,

    pub success: bool,
}

impl Default for ServiceResponse {
    /// The empty successful response: no payload, no exception.
    fn default() -> Self {
        Self {
            data: None,
            exception: None,
            success: true,
        }
    }
}

impl ServiceResponse {
    /// Create a successful response carrying a payload.
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            exception: None,
            success: true,
        }
    }

    /// Create a failure response describing `error`.
    pub fn failure(error: &ServiceError) -> Self {
        Self {
            data: None,
            exception: Some(ExceptionInfo::from(error)),
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exception.is_none()
    }
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}
