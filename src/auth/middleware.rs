use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{claims::Claims, verifier::TokenVerifier},
    errors::{AppError, AuthError},
};

/// Splits an `Authorization` header value into its bearer token: scheme and
/// token separated by whitespace, scheme case-insensitive, nothing else
/// accepted.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::InvalidHeader {
            description: "Authorization header must start with \"Bearer\".",
        }),
        [_] => Err(AuthError::InvalidHeader {
            description: "Token not found.",
        }),
        _ => Err(AuthError::InvalidHeader {
            description: "Authorization header must be bearer token.",
        }),
    }
}

/// Verified claims of the caller. Extracting this runs the header and token
/// checks; the per-endpoint permission check stays with the handler via
/// [`require_permission`](crate::auth::require_permission).
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let verifier = req
        .app_data::<web::Data<TokenVerifier>>()
        .ok_or_else(|| AppError::Internal("token verifier not configured".to_string()))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer_token(header)?;
    let claims = verifier.verify(token)?;

    Ok(AuthenticatedUser(claims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header() {
        let err = extract_bearer_token(None).unwrap_err();
        assert!(matches!(err, AuthError::MissingHeader));
    }

    #[test]
    fn test_well_formed_header() {
        let token = extract_bearer_token(Some("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token(Some("bearer tok")).unwrap(), "tok");
        assert_eq!(extract_bearer_token(Some("BEARER tok")).unwrap(), "tok");
    }

    #[test]
    fn test_wrong_scheme() {
        let err = extract_bearer_token(Some("Basic dXNlcjpwYXNz")).unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidHeader {
                description: "Authorization header must start with \"Bearer\"."
            }
        ));
    }

    #[test]
    fn test_scheme_without_token() {
        for header in ["Bearer", "Bearer ", " Bearer  "] {
            let err = extract_bearer_token(Some(header)).unwrap_err();
            assert!(
                matches!(
                    err,
                    AuthError::InvalidHeader {
                        description: "Token not found."
                    }
                ),
                "header {:?}",
                header
            );
        }
    }

    #[test]
    fn test_too_many_parts() {
        let err = extract_bearer_token(Some("Bearer one two")).unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidHeader {
                description: "Authorization header must be bearer token."
            }
        ));
    }

    #[test]
    fn test_empty_header_value() {
        let err = extract_bearer_token(Some("")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidHeader { .. }));
    }
}
