use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use gather_core::{DomainError, FieldErrors};
use gather_shared::constants::GROUPS_PATH;

use crate::response::found;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication required")]
    AuthenticationRequired { sign_in_path: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::GroupNotFound(id) => ApiError::NotFound(format!("group {}", id)),
            DomainError::NotGroupLeader { .. } => ApiError::AuthorizationDenied(err.to_string()),
            DomainError::Validation(errors) => ApiError::ValidationFailed(errors),
            DomainError::AlreadyMember { .. } => ApiError::BadRequest(err.to_string()),
            DomainError::DatabaseError(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::AuthenticationRequired { sign_in_path } => {
                tracing::debug!("Authentication required, redirecting to {}", sign_in_path);
                return found(&sign_in_path);
            },
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                return found(GROUPS_PATH);
            },
            // Same redirect as NotFound; no message is shown to the user.
            ApiError::AuthorizationDenied(msg) => {
                tracing::warn!("Authorization denied: {}", msg);
                return found(GROUPS_PATH);
            },
            ApiError::ValidationFailed(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response();
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg)
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use uuid::Uuid;

    #[test]
    fn test_not_found_and_denied_redirect_to_index() {
        let not_found: ApiError = DomainError::GroupNotFound(Uuid::new_v4()).into();
        assert!(matches!(not_found, ApiError::NotFound(_)));

        let denied: ApiError = DomainError::NotGroupLeader {
            group_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        }
        .into();
        assert!(matches!(denied, ApiError::AuthorizationDenied(_)));

        for err in [not_found, denied] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(response.headers()[header::LOCATION], "/groups");
        }
    }

    #[test]
    fn test_authentication_required_redirects_to_sign_in() {
        let response = ApiError::AuthenticationRequired {
            sign_in_path: "/users/sign_in".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/users/sign_in");
    }

    #[test]
    fn test_validation_is_unprocessable() {
        let mut errors = FieldErrors::new();
        errors.add("name", "can't be blank");
        let response = ApiError::from(DomainError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_database_error_is_internal() {
        let response = ApiError::from(DomainError::DatabaseError("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
