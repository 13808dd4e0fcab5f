use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use validator::ValidationErrors;

use crate::store::StoreError;

/// Failure kinds surfaced by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Wraps a store failure with a description of what was being attempted.
/// The error kind is kept: a missing row stays `NotFound`, a duplicate stays
/// `Conflict`, anything else becomes `Internal`.
pub trait Context<T> {
    fn context(self, what: &str) -> Result<T, ServiceError>;
}

impl<T> Context<T> for Result<T, StoreError> {
    fn context(self, what: &str) -> Result<T, ServiceError> {
        self.map_err(|err| {
            let msg = format!("{what}: {err}");
            match err {
                StoreError::NotFound => ServiceError::NotFound(msg),
                StoreError::Conflict(_) => ServiceError::Conflict(msg),
                StoreError::Database(_) => ServiceError::Internal(msg),
            }
        })
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Internal(msg) = self {
            log::error!("{msg}");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_keep_their_kind() {
        let missing: Result<(), StoreError> = Err(StoreError::NotFound);
        let err = missing.context("room not found").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(err.to_string().starts_with("room not found: "));

        let dup: Result<(), StoreError> = Err(StoreError::Conflict("UNIQUE constraint failed".into()));
        assert!(matches!(
            dup.context("failed to assign cleaner").unwrap_err(),
            ServiceError::Conflict(_)
        ));

        let db: Result<(), StoreError> = Err(StoreError::Database(sqlx::Error::PoolClosed));
        assert!(matches!(
            db.context("failed to list rooms").unwrap_err(),
            ServiceError::Internal(_)
        ));
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ServiceError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
