use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CodeDto, ErrorDto, CODE_SUCCESS},
        cart::{CartAmountDto, CartDto, CartProductDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::cart::CartService,
        state::AppState,
        util::validate::check_positive,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the caller's cart.
///
/// # Access Control
/// - Authenticated via bearer token or session cookie
///
/// # Returns
/// - `200 OK` - Cart lines with product name, price and brand
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart contents", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let carts = CartService::new(&state.db).get_cart(claims.id).await?;

    Ok((
        StatusCode::OK,
        Json(CartDto {
            code: CODE_SUCCESS,
            carts: carts.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Add units of a product to the caller's cart.
///
/// Adding a product already in the cart increases its quantity. Unknown products are
/// ignored.
///
/// # Returns
/// - `200 OK` - `{ code: 8000 }`
/// - `400 Bad Request` - Non-positive product id or amount
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = CartAmountDto,
    responses(
        (status = 200, description = "Product added", body = CodeDto),
        (status = 400, description = "Invalid product id or amount", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CartAmountDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    check_positive("product_id", payload.product_id.into())?;
    check_positive("amount", payload.amount)?;

    CartService::new(&state.db)
        .add_to_cart(claims.id, payload.product_id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(CodeDto::code(CODE_SUCCESS))))
}

/// Overwrite the quantity of a product in the caller's cart.
///
/// An amount of zero removes the product. Products not in the cart are ignored.
///
/// # Returns
/// - `200 OK` - `{ code: 8000 }`
/// - `400 Bad Request` - Non-positive product id or negative amount
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    patch,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = CartAmountDto,
    responses(
        (status = 200, description = "Quantity updated", body = CodeDto),
        (status = 400, description = "Invalid product id or amount", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cart_amount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CartAmountDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    check_positive("product_id", payload.product_id.into())?;
    if payload.amount < 0 {
        return Err(AppError::BadRequest(
            "amount must not be negative".to_string(),
        ));
    }

    CartService::new(&state.db)
        .update_cart_amount(claims.id, payload.product_id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(CodeDto::code(CODE_SUCCESS))))
}

/// Remove a product from the caller's cart. Idempotent.
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = CartProductDto,
    responses(
        (status = 200, description = "Product removed", body = CodeDto),
        (status = 400, description = "Invalid product id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_from_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CartProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    check_positive("product_id", payload.product_id.into())?;

    CartService::new(&state.db)
        .delete_from_cart(claims.id, payload.product_id)
        .await?;

    Ok((StatusCode::OK, Json(CodeDto::code(CODE_SUCCESS))))
}
