//! Error conversion implementations.
//!
//! `From` implementations turning workflow, domain and extractor errors into
//! [`ApiError`].

use arena_domain::common::DomainError;
use arena_workflow::errors::WorkflowError;
use axum::extract::rejection::{JsonRejection, QueryRejection};

use super::api_error::ApiError;

// =============================================================================
// From<WorkflowError> for ApiError
// =============================================================================

impl From<WorkflowError> for ApiError {
    fn from(error: WorkflowError) -> Self {
        match error {
            WorkflowError::NotFound {
                entity_type,
                identifier,
            } => ApiError::not_found(entity_type, identifier),
            WorkflowError::Domain(domain_error) => domain_error.into(),
            WorkflowError::Conflict { reason } => ApiError::conflict(reason),
            WorkflowError::InvalidState { reason } => ApiError::invalid_state(reason),
        }
    }
}

// =============================================================================
// From<DomainError> for ApiError
// =============================================================================

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(validation_error) => {
                ApiError::validation_field(validation_error.field(), validation_error.message())
            }
            DomainError::Roster(roster_error) => WorkflowError::from(roster_error).into(),
            DomainError::Battle(battle_error) => ApiError::invalid_state(battle_error.message()),
        }
    }
}

// =============================================================================
// Extractor Rejections
// =============================================================================

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::decode(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::decode(rejection.body_text())
    }
}

// =============================================================================
// Tests
// =============================================================================
