use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDto {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub price: i64,
    pub amount: i64,
    pub title_image: String,
    pub description_asset: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub brand_name: String,
    pub categories: Vec<CategoryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CreateProductDto {
    pub brand_id: i32,
    pub name: String,
    pub price: i64,
    /// Units in stock.
    pub amount: i64,
    pub title_image: String,
    pub description_asset: String,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub code: i32,
    pub product: Option<ProductDetailDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedProductsDto {
    pub code: i32,
    pub products: Vec<ProductDto>,
    /// Index of the last page, zero-based.
    pub max_page: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct BrandDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
