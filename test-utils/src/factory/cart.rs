//! Cart factory for creating test cart lines.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a cart line for `(user_id, product_id)` holding `amount` units.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the cart
/// - `product_id` - Product in the line
/// - `amount` - Quantity, expected to be positive
///
/// # Returns
/// - `Ok(entity::cart::Model)` - Created cart line
/// - `Err(DbErr)` - Database error during insert, including a duplicate key
pub async fn create_cart_entry(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
    amount: i64,
) -> Result<entity::cart::Model, DbErr> {
    let now = Utc::now();
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
