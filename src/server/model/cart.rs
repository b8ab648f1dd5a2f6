//! Cart domain models.

use chrono::{DateTime, Utc};

use crate::model::cart::CartItemDto;

/// Stored cart line. Only exists while `amount > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub user_id: i32,
    pub product_id: i32,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn from_entity(entity: entity::cart::Model) -> Self {
        Self {
            user_id: entity.user_id,
            product_id: entity.product_id,
            amount: entity.amount,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Cart line joined with the product it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: i32,
    pub product_name: String,
    pub price: i64,
    pub brand_name: String,
    pub amount: i64,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            product_id: self.product_id,
            product_name: self.product_name,
            price: self.price,
            brand_name: self.brand_name,
            amount: self.amount,
        }
    }
}
