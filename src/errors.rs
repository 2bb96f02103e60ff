use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Authorization failures, one variant per step of the validation chain:
/// header extraction, token verification, then permission membership.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingHeader,

    #[error("{description}")]
    InvalidHeader { description: &'static str },

    #[error("Token expired.")]
    TokenExpired,

    #[error("{description}")]
    InvalidClaims { description: &'static str },

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionNotFound,
}

impl AuthError {
    /// Machine-readable code, aligned with the identity provider's error
    /// vocabulary. Not part of the response body; used in logs and tests.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::InvalidHeader { .. } => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims { .. } => "invalid_claims",
            AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionNotFound => "unauthorized",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader
            | AuthError::InvalidHeader { .. }
            | AuthError::TokenExpired
            | AuthError::InvalidClaims { .. } => StatusCode::UNAUTHORIZED,
            AuthError::PermissionsMissing => StatusCode::BAD_REQUEST,
            AuthError::PermissionNotFound => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text clients see. Non-auth variants surface the canonical reason
    /// phrase; variant detail only reaches logs via `Display`.
    fn wire_message(&self) -> String {
        match self {
            AppError::BadRequest(_) => "Bad Request".to_string(),
            AppError::NotFound(_) => "Resource Not Found".to_string(),
            AppError::Unprocessable(_) => "Unprocessable Entity".to_string(),
            AppError::Auth(err) => err.to_string(),
            AppError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(err) => err.status_code(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.status_code().as_u16(),
            message: self.wire_message(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Unprocessable(format!("store operation failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unprocessable("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_statuses_and_codes() {
        let cases: Vec<(AuthError, StatusCode, &str)> = vec![
            (
                AuthError::MissingHeader,
                StatusCode::UNAUTHORIZED,
                "authorization_header_missing",
            ),
            (
                AuthError::InvalidHeader {
                    description: "Token not found.",
                },
                StatusCode::UNAUTHORIZED,
                "invalid_header",
            ),
            (
                AuthError::TokenExpired,
                StatusCode::UNAUTHORIZED,
                "token_expired",
            ),
            (
                AuthError::InvalidClaims {
                    description: "Unable to parse authentication token.",
                },
                StatusCode::UNAUTHORIZED,
                "invalid_claims",
            ),
            (
                AuthError::PermissionsMissing,
                StatusCode::BAD_REQUEST,
                "invalid_claims",
            ),
            (
                AuthError::PermissionNotFound,
                StatusCode::FORBIDDEN,
                "unauthorized",
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status_code(), status, "{:?}", err);
            assert_eq!(err.code(), code, "{:?}", err);
        }
    }

    #[test]
    fn test_wire_messages_are_canonical() {
        assert_eq!(
            AppError::NotFound("question 5".into()).wire_message(),
            "Resource Not Found"
        );
        assert_eq!(
            AppError::Unprocessable("difficulty out of range".into()).wire_message(),
            "Unprocessable Entity"
        );
        assert_eq!(
            AppError::from(AuthError::PermissionNotFound).wire_message(),
            "Permission not found."
        );
    }

    #[test]
    fn test_store_failures_map_to_unprocessable() {
        let err = AppError::from(mongodb::error::Error::custom("connection reset"));
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_validation_failures_map_to_unprocessable() {
        use validator::Validate;

        #[derive(validator::Validate)]
        struct Probe {
            #[validate(length(min = 1))]
            text: String,
        }

        let errors = Probe {
            text: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_auth_errors_keep_their_status_through_app_error() {
        let err = AppError::from(AuthError::PermissionsMissing);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(AuthError::MissingHeader);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
