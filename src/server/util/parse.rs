use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// # Arguments
/// - `headers` - Request headers
///
/// # Returns
/// - `Some(&str)` - Non-empty bearer token
/// - `None` - Header absent, not valid UTF-8, not a bearer scheme, or empty
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
