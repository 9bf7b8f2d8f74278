use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::dto::response::ErrorResponse;

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity_type} '{identifier}' not found")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
    },

    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    #[error("Invalid request: {message}")]
    DecodeError { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ValidationError { .. } | Self::InvalidState { .. } | Self::DecodeError { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::NotFound { entity_type, .. } => {
                format!("{}_NOT_FOUND", entity_type.to_uppercase().replace(' ', "_"))
            }
            Self::ValidationError { .. } => "VALIDATION_ERROR".to_string(),
            Self::InvalidState { .. } => "INVALID_STATE".to_string(),
            Self::Conflict { .. } => "CONFLICT".to_string(),
            Self::DecodeError { .. } => "DECODE_ERROR".to_string(),
        }
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        tracing::warn!(status = status_code.as_u16(), code = %error_code, "{}", message);

        let error_response = match &self {
            Self::ValidationError {
                field: Some(field), ..
            } => ErrorResponse::with_details(error_code, message, json!({ "field": field })),
            _ => ErrorResponse::new(error_code, message),
        };

        (status_code, Json(error_response)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
