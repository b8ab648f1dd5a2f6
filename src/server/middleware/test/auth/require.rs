use super::*;

/// Tests authenticating with a bearer token.
///
/// Expected: Ok(SessionClaims) for the token's user
#[test]
fn accepts_bearer_token() -> Result<(), AppError> {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let token = issuer.issue(identity(), Duration::hours(1))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, header(&format!("Bearer {}", token)));

    let claims = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require()?;

    assert_eq!(claims.id, 7);
    assert_eq!(claims.nickname, "ferris");

    Ok(())
}

/// Tests authenticating with the session cookie.
///
/// Expected: Ok(SessionClaims)
#[test]
fn accepts_session_cookie() -> Result<(), AppError> {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let token = issuer.issue(identity(), Duration::hours(1))?;

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, header(&format!("lang=ko; {}={}", COOKIE_NAME, token)));

    let claims = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require()?;

    assert_eq!(claims.id, 7);

    Ok(())
}

/// Tests a request without credentials.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a token signed with another key.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_token() -> Result<(), AppError> {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let foreign = JwtIssuer::new(b"someone-else".to_vec()).issue(identity(), Duration::hours(1))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, header(&format!("Bearer {}", foreign)));

    let result = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Verifies that a token issued two hours ago with a one hour lifetime is
/// rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() -> Result<(), AppError> {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let token = issuer.issue_at(
        identity(),
        Duration::hours(1),
        Utc::now() - Duration::hours(2),
    )?;

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, header(&format!("{}={}", COOKIE_NAME, token)));

    let result = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that the bearer header wins over the cookie.
///
/// Verifies that a bad bearer token is not rescued by a valid cookie.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn bearer_takes_precedence_over_cookie() -> Result<(), AppError> {
    let issuer = JwtIssuer::new(b"guard-secret".to_vec());
    let token = issuer.issue(identity(), Duration::hours(1))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, header("Bearer not-a-token"));
    headers.insert(COOKIE, header(&format!("{}={}", COOKIE_NAME, token)));

    let result = AuthGuard::new(&issuer, &headers, COOKIE_NAME).require();

    assert!(result.is_err());

    Ok(())
}
