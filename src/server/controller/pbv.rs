use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CodeDto, ErrorDto, CODE_FIRST_KIND, CODE_SUCCESS},
        pbv::{PbvOptionDto, PbvOptionResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::pbv::{AddPbvOptionResult, PbvOptionChange, PbvOptionData},
        service::pbv::PbvService,
        state::AppState,
    },
};

/// Tag for grouping PBV option endpoints in OpenAPI documentation
pub static PBV_TAG: &str = "pbv";

fn change_code(change: PbvOptionChange) -> CodeDto {
    match change {
        PbvOptionChange::Applied => CodeDto::code(CODE_SUCCESS),
        PbvOptionChange::NotFound => CodeDto::code(CODE_FIRST_KIND),
    }
}

/// Get the caller's saved PBV options.
///
/// # Returns
/// - `200 OK` - `{ code: 8000, data }`, or `{ code: 8001, data: null }` when none saved
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error or undecodable stored options
#[utoipa::path(
    get,
    path = "/api/pbv",
    tag = PBV_TAG,
    responses(
        (status = 200, description = "Saved options", body = PbvOptionResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pbv_option(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let data = PbvService::new(&state.db).get_option(claims.id).await?;

    let response = match data {
        Some(data) => PbvOptionResponseDto {
            code: CODE_SUCCESS,
            data: Some(data.into_dto()),
        },
        None => PbvOptionResponseDto {
            code: CODE_FIRST_KIND,
            data: None,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Save the caller's first set of PBV options.
///
/// # Returns
/// - `200 OK` - `{ code: 8000, id }`, or `{ code: 8001 }` when options already exist
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/pbv",
    tag = PBV_TAG,
    request_body = PbvOptionDto,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_pbv_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PbvOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let result = PbvService::new(&state.db)
        .add_option(claims.id, PbvOptionData::from_dto(payload))
        .await?;

    let body = match result {
        AddPbvOptionResult::Created(id) => CodeDto::created(id),
        AddPbvOptionResult::AlreadyExists => CodeDto::code(CODE_FIRST_KIND),
    };

    Ok((StatusCode::OK, Json(body)))
}

/// Replace the caller's saved PBV options.
///
/// # Returns
/// - `200 OK` - `{ code: 8000 }`, or `{ code: 8001 }` when nothing is saved yet
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/pbv",
    tag = PBV_TAG,
    request_body = PbvOptionDto,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pbv_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PbvOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let change = PbvService::new(&state.db)
        .update_option(claims.id, PbvOptionData::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(change_code(change))))
}

/// Delete the caller's saved PBV options.
///
/// # Returns
/// - `200 OK` - `{ code: 8000 }`, or `{ code: 8001 }` when nothing was saved
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    delete,
    path = "/api/pbv",
    tag = PBV_TAG,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pbv_option(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let change = PbvService::new(&state.db).delete_option(claims.id).await?;

    Ok((StatusCode::OK, Json(change_code(change))))
}
