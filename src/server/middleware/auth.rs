use axum::http::HeaderMap;

use crate::server::{
    error::{auth::AuthError, AppError},
    token::{SessionClaims, TokenIssuer},
    util::{cookie::find_cookie, parse::bearer_token},
};

/// Resolves the session of the caller from request headers.
///
/// A bearer token in the `Authorization` header takes precedence over the session
/// cookie; when both are present only the header is checked.
pub struct AuthGuard<'a> {
    issuer: &'a dyn TokenIssuer,
    headers: &'a HeaderMap,
    cookie_name: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(issuer: &'a dyn TokenIssuer, headers: &'a HeaderMap, cookie_name: &'a str) -> Self {
        Self {
            issuer,
            headers,
            cookie_name,
        }
    }

    /// Requires a valid session token on the request.
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Verified claims of the caller
    /// - `Err(AuthError::MissingToken)` - No bearer header and no session cookie
    /// - `Err(AuthError::InvalidToken)` - Token failed signature or expiry checks
    pub fn require(&self) -> Result<SessionClaims, AppError> {
        let Some(token) =
            bearer_token(self.headers).or_else(|| find_cookie(self.headers, self.cookie_name))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self
            .issuer
            .verify(token)
            .map_err(AuthError::InvalidToken)?;

        Ok(claims)
    }
}
