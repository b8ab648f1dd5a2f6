use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CodeDto, ErrorDto},
        review::AddReviewDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::AddReviewParams,
        service::review::ReviewService,
        state::AppState,
        util::validate::{check_len, check_positive, check_range},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Write a review or a reply to one.
///
/// The review and the product's running score totals are updated together.
///
/// # Access Control
/// - Authenticated via bearer token or session cookie
///
/// # Returns
/// - `200 OK` - `{ code: 8000, id }` on success, `8001` product missing, `8002` parent
///   review missing or on another product
/// - `400 Bad Request` - Score outside 1..=5, content outside 5..=1000 characters
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error or product without statistics
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = AddReviewDto,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    check_range("score", payload.score, 1..=5)?;
    check_positive("product_id", payload.product_id.into())?;
    check_len("content", &payload.content, 5..=1000)?;

    let result = ReviewService::new(&state.db)
        .add_review(AddReviewParams::from_dto(claims.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
