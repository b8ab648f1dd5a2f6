//! HTTP route table and cross-cutting layers.
//!
//! Routes are registered through `OpenApiRouter` so every handler's `#[utoipa::path]`
//! lands in the generated document served at `/api/openapi.json`.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    config::Config,
    controller::{
        auth::{self, AUTH_TAG},
        cart::{self, CART_TAG},
        pbv::{self, PBV_TAG},
        product::{self, PRODUCT_TAG},
        review::{self, REVIEW_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Commerce API", description = "Catalog, cart, review and account endpoints"),
    tags(
        (name = AUTH_TAG, description = "Sign-up, login, logout and current account"),
        (name = PRODUCT_TAG, description = "Catalog reads"),
        (name = CART_TAG, description = "Shopping cart of the caller"),
        (name = REVIEW_TAG, description = "Product reviews"),
        (name = PBV_TAG, description = "Saved PBV options of the caller")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `config` - Supplies the allowed CORS origin, if any
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting its state
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::sign_up))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(product::get_product))
        .routes(routes!(product::get_reviews))
        .routes(routes!(product::get_statistics))
        .routes(routes!(product::get_categories))
        .routes(routes!(product::get_brands))
        .routes(routes!(
            cart::get_cart,
            cart::add_to_cart,
            cart::update_cart_amount,
            cart::delete_from_cart
        ))
        .routes(routes!(review::add_review))
        .routes(routes!(
            pbv::get_pbv_option,
            pbv::add_pbv_option,
            pbv::update_pbv_option,
            pbv::delete_pbv_option
        ))
        .split_for_parts();

    let router = router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http());

    match cors_layer(config)? {
        Some(cors) => Ok(router.layer(cors)),
        None => Ok(router),
    }
}

/// Credentialed CORS for the single configured origin.
fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(None);
    };

    let origin: HeaderValue = origin.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        reason: "not a valid header value".to_string(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
    ))
}
