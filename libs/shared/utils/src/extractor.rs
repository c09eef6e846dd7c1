use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_models::error::AppError;
use shared_models::session::Session;

pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// Builds a `Session` from request headers.
///
/// The bearer token is not verified; token issuance and verification belong
/// to the external OAuth provider.
pub fn session_from_headers(headers: &HeaderMap) -> Result<Session, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))?;

    let mut session = Session::new(token);

    if let Some(email) = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    {
        session = session.with_email(email);
    }

    Ok(session)
}

// Middleware that attaches the caller's session to request extensions
pub async fn session_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = session_from_headers(request.headers())?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    #[test]
    fn parses_bearer_token_and_email() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
        headers.insert(USER_EMAIL_HEADER, HeaderValue::from_static("asha@example.com"));

        let session = session_from_headers(&headers).unwrap();
        assert_eq!(session.token, "abc123");
        assert_eq!(session.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn missing_header_is_auth_error() {
        let headers = HeaderMap::new();
        assert_matches!(session_from_headers(&headers), Err(AppError::Auth(_)));
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_matches!(session_from_headers(&headers), Err(AppError::Auth(_)));
    }

    #[test]
    fn rejects_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer   "));
        assert_matches!(session_from_headers(&headers), Err(AppError::Auth(_)));
    }
}
