use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemDto {
    pub product_id: i32,
    pub product_name: String,
    pub price: i64,
    pub brand_name: String,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CartDto {
    pub code: i32,
    pub carts: Vec<CartItemDto>,
}

/// Body for adding to or overwriting a cart line.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CartAmountDto {
    pub product_id: i32,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CartProductDto {
    pub product_id: i32,
}
