use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};
use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    token::{IdentityClaims, JwtIssuer, TokenIssuer},
};

mod require;

const COOKIE_NAME: &str = "session";

fn identity() -> IdentityClaims {
    IdentityClaims {
        id: 7,
        nickname: "ferris".to_string(),
        created_at: Utc::now(),
    }
}

fn header(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap()
}
