use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{CodeDto, ErrorDto, CODE_FIRST_KIND, CODE_SUCCESS},
        product::{
            BrandDto, CategoryDto, CreateProductDto, PaginatedProductsDto, ProductResponseDto,
        },
        review::{ProductStatisticsDto, ReviewsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::{CreateProductParams, GetProductsParam},
        service::{
            product::{ProductService, MAX_PAGE_SIZE},
            review::ReviewService,
        },
        state::AppState,
        util::validate::{check_len, check_positive, check_range},
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct ProductListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// `0` lists every category.
    #[serde(default)]
    pub category_id: i32,
}

fn default_page_size() -> u64 {
    10
}

/// Get one page of products, newest first.
///
/// # Arguments
/// - `params` - Zero-based page, page size and optional category filter
///
/// # Returns
/// - `200 OK` - Products on the page and the index of the last page
/// - `400 Bad Request` - Page size outside 1..=100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Products per page, 1 to 100 (default: 10)"),
        ("category_id" = Option<i32>, Query, description = "Category filter, 0 for all (default: 0)")
    ),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<impl IntoResponse, AppError> {
    check_range("page_size", params.page_size, 1..=MAX_PAGE_SIZE)?;

    let page = ProductService::new(&state.db)
        .get_products(GetProductsParam {
            page: params.page,
            page_size: params.page_size,
            category_id: params.category_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedProductsDto {
            code: CODE_SUCCESS,
            products: page.products.into_iter().map(|p| p.into_dto()).collect(),
            max_page: page.max_page,
        }),
    ))
}

/// List a new product under one of the caller's brands.
///
/// The product, its category links and its empty statistics row are written together.
///
/// # Access Control
/// - Authenticated via bearer token or session cookie
/// - Caller must operate the brand
///
/// # Returns
/// - `200 OK` - `{ code: 8000, id }` on success, `8001` when the brand is missing or
///   belongs to another user
/// - `400 Bad Request` - Name outside 1..=100 characters, negative price or stock
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error or unknown category id
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Business outcome code", body = CodeDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    check_positive("brand_id", payload.brand_id.into())?;
    check_len("name", &payload.name, 1..=100)?;
    check_range("price", payload.price, 0..=i64::MAX)?;
    check_range("amount", payload.amount, 0..=i64::MAX)?;

    let result = ProductService::new(&state.db)
        .create_product(claims.id, CreateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get a product with its brand name and categories.
///
/// # Returns
/// - `200 OK` - `{ code: 8000, product }`, or `{ code: 8001, product: null }` when absent
/// - `400 Bad Request` - Negative id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product lookup outcome", body = ProductResponseDto),
        (status = 400, description = "Invalid product id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if product_id < 0 {
        return Err(AppError::BadRequest(
            "product_id must not be negative".to_string(),
        ));
    }

    let product = ProductService::new(&state.db).get_product(product_id).await?;

    let response = match product {
        Some(detail) => ProductResponseDto {
            code: CODE_SUCCESS,
            product: Some(detail.into_dto()),
        },
        None => ProductResponseDto {
            code: CODE_FIRST_KIND,
            product: None,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get the reviews of a product in the order they were written.
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/reviews",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews and replies", body = ReviewsDto),
        (status = 400, description = "Invalid product id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    check_positive("product_id", product_id.into())?;

    let reviews = ReviewService::new(&state.db).get_reviews(product_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewsDto {
            code: CODE_SUCCESS,
            reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Get the review totals of a product.
///
/// # Returns
/// - `200 OK` - Review count, score sum, average and sold quantity
/// - `404 Not Found` - Product has no statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/statistics",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product statistics", body = ProductStatisticsDto),
        (status = 404, description = "Product has no statistics", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(stats) = ReviewService::new(&state.db)
        .get_statistics(product_id)
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "No statistics for product {}",
            product_id
        )));
    };

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get every catalog category.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = ProductService::new(&state.db).get_categories().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<CategoryDto>>(),
        ),
    ))
}

/// Get the brands operated by the caller.
///
/// # Access Control
/// - Authenticated via bearer token or session cookie
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Caller's brands", body = Vec<BrandDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(
        state.issuer.as_ref(),
        &headers,
        &state.config.session_cookie_name,
    )
    .require()?;

    let brands = ProductService::new(&state.db)
        .get_brands_by_user(claims.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            brands
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<BrandDto>>(),
        ),
    ))
}
