//! Session token issuance and verification.
//!
//! `TokenIssuer` is the seam the auth service and the request guard depend on. The only
//! implementation, `JwtIssuer`, produces compact HS256 JWTs through `jsonwebtoken`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::token::TokenError;

/// Identity of an authenticated user, as handed to the issuer after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityClaims {
    pub id: i32,
    pub nickname: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i32,
    /// Random per-session identifier; two logins never share one.
    pub uuid: Uuid,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Issues and verifies session tokens.
pub trait TokenIssuer: Send + Sync {
    /// Signs a fresh token for `identity` valid for `ttl` from now.
    fn issue(&self, identity: IdentityClaims, ttl: Duration) -> Result<String, TokenError>;

    /// Checks signature and expiry and returns the embedded claims.
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}

/// HS256 JWT issuer keyed by a shared secret.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIssuer {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        let secret = secret.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            validation,
        }
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        identity: IdentityClaims,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = SessionClaims {
            id: identity.id,
            uuid: Uuid::new_v4(),
            nickname: identity.nickname,
            created_at: identity.created_at,
            iat,
            exp: iat + ttl.num_seconds(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, identity: IdentityClaims, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(identity, ttl, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|e| match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                })?;

        Ok(data.claims)
    }
}

/// Returns the claims segment of a compact token.
///
/// Exposed to browsers through the non-HttpOnly public session cookie so the front end
/// can read who is logged in without holding the signature.
pub fn public_segment(token: &str) -> Option<&str> {
    token.split('.').nth(1)
}
