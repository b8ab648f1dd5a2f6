use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::token::TokenError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried neither a bearer token nor a session cookie.
    #[error("No session token present on request")]
    MissingToken,

    /// A token was present but failed verification (bad signature, malformed, expired).
    #[error("Session token rejected: {0}")]
    InvalidToken(#[source] TokenError),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants become 401 Unauthorized with the same client-facing message. The
/// verification failure reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Not authorized".to_string(),
            }),
        )
            .into_response()
    }
}
