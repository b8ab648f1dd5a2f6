use thiserror::Error;

/// Failures while issuing or verifying session tokens.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Claims could not be serialized or signed.
    #[error("Failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// Token is not a well-formed HS256 JWT carrying session claims.
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// Signature does not match header and claims.
    #[error("Token signature mismatch")]
    InvalidSignature,

    /// Token is past its `exp` claim.
    #[error("Token expired")]
    Expired,
}
