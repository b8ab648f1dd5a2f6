use std::sync::LazyLock;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use regex::Regex;

use crate::{
    model::{
        api::{CodeDto, ErrorDto, CODE_FIRST_KIND, CODE_SUCCESS},
        auth::{LoginDto, LoginResponseDto, SignUpDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoginParams, SignUpParams},
        service::auth::AuthService,
        state::AppState,
        token::public_segment,
        util::{
            cookie::CookieSpec,
            validate::{check_len, check_pattern},
        },
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\..+$").expect("Invalid regex"));

/// Latin letters, digits and Hangul (syllables and jamo).
static NICKNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9ㄱ-ㅎ가-힣ㅏ-ㅣ-]+$").expect("Invalid regex"));

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid regex"));

/// Latin letters, digits and printable ASCII punctuation.
static PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z0-9~!@#$%^&*()\-_+=\[\]{}.,<>/?;:'"\\|`]+$"#).expect("Invalid regex")
});

fn validate_sign_up(payload: &SignUpDto) -> Result<(), AppError> {
    check_len("email", &payload.email, 1..=100)?;
    check_len("nickname", &payload.nickname, 4..=30)?;
    check_len("username", &payload.username, 6..=30)?;
    check_len("password", &payload.password, 6..=30)?;

    check_pattern("email", &payload.email, &EMAIL_RE)?;
    check_pattern("nickname", &payload.nickname, &NICKNAME_RE)?;
    check_pattern("username", &payload.username, &USERNAME_RE)?;
    check_pattern("password", &payload.password, &PASSWORD_RE)?;

    Ok(())
}

/// Register a new account.
///
/// Validates field lengths and character sets, then creates the account unless the
/// nickname or username is already taken.
///
/// # Returns
/// - `200 OK` - `{ code: 8000, id }` on success, `8001` nickname taken, `8002` username taken
/// - `400 Bad Request` - Field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 400, description = "Invalid account fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_sign_up(&payload)?;

    let service = AuthService::new(
        &state.db,
        state.issuer.as_ref(),
        state.config.session_timeout,
    );

    let result = service.sign_up(SignUpParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Log in with username and password.
///
/// On success sets two cookies lasting the session timeout: an HTTP-only cookie holding
/// the full token, and a script-readable cookie holding only the token's claims segment
/// so the frontend can display who is logged in.
///
/// # Returns
/// - `200 OK` - `{ code: 8000, token }` on success, `{ code: 8001 }` on bad credentials
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Business outcome code and token", body = LoginResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let config = &state.config;
    let service = AuthService::new(&state.db, state.issuer.as_ref(), config.session_timeout);

    let mut headers = HeaderMap::new();

    let Some(token) = service.login(LoginParams::from_dto(payload)).await? else {
        return Ok((
            StatusCode::OK,
            headers,
            Json(LoginResponseDto {
                code: CODE_FIRST_KIND,
                token: String::new(),
            }),
        ));
    };

    let max_age = config.session_timeout.num_seconds();
    let session_cookie = CookieSpec {
        name: &config.session_cookie_name,
        domain: &config.app_domain,
    }
    .set(&token, max_age, true);
    let public_cookie = CookieSpec {
        name: &config.public_session_cookie_name,
        domain: &config.app_domain,
    }
    .set(public_segment(&token).unwrap_or_default(), max_age, false);

    headers.append(SET_COOKIE, cookie_header(session_cookie)?);
    headers.append(SET_COOKIE, cookie_header(public_cookie)?);

    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponseDto {
            code: CODE_SUCCESS,
            token,
        }),
    ))
}

/// Log out by clearing both session cookies.
///
/// Tokens are stateless; a copy kept elsewhere stays valid until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Cookies cleared", body = CodeDto)
    ),
)]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let config = &state.config;

    let mut headers = HeaderMap::new();
    for name in [
        &config.session_cookie_name,
        &config.public_session_cookie_name,
    ] {
        let cookie = CookieSpec {
            name,
            domain: &config.app_domain,
        }
        .clear();
        headers.append(SET_COOKIE, cookie_header(cookie)?);
    }

    Ok((StatusCode::OK, headers, Json(CodeDto::code(CODE_SUCCESS))))
}

/// Get the account of the logged-in caller.
///
/// # Access Control
/// - Authenticated via bearer token or session cookie
///
/// # Returns
/// - `200 OK` - Account without credentials
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let service = AuthService::new(
        &state.db,
        state.issuer.as_ref(),
        state.config.session_timeout,
    );

    let Some(user) = service.get_user(claims.id).await? else {
        return Err(AppError::NotFound(format!("User {} not found", claims.id)));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}

fn cookie_header(cookie: String) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid Set-Cookie value: {}", e)))
}
