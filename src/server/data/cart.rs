//! Cart data repository.
//!
//! A cart line is keyed by `(user_id, product_id)`. Quantity changes that accumulate go
//! through [`CartRepository::increment`], a single `UPDATE ... SET amount = amount + ?`,
//! so two concurrent adds both land.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    cart::CartEntry,
    product::Product,
};

/// Repository providing database operations for cart lines.
pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    /// Creates a new CartRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the cart line for a user and product.
    ///
    /// # Returns
    /// - `Ok(Some(CartEntry))` - Line present
    /// - `Ok(None)` - Product not in the user's cart
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, user_id: i32, product_id: i32) -> Result<Option<CartEntry>, DbErr> {
        let entity = entity::prelude::Cart::find_by_id((user_id, product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CartEntry::from_entity))
    }

    /// Inserts a new cart line.
    ///
    /// # Returns
    /// - `Ok(CartEntry)` - The created line
    /// - `Err(DbErr)` - Database error, including a unique violation when the line
    ///   already exists and a foreign key violation when the product is gone
    pub async fn insert(
        &self,
        user_id: i32,
        product_id: i32,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<CartEntry, DbErr> {
        let entity = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(product_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(CartEntry::from_entity(entity))
    }

    /// Atomically adds `amount` to an existing line.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; `0` when the line does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment(
        &self,
        user_id: i32,
        product_id: i32,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        use entity::cart::Column;

        let result = entity::prelude::Cart::update_many()
            .col_expr(Column::Amount, Expr::col(Column::Amount).add(amount))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites the amount of an existing line.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; `0` when the line does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_amount(
        &self,
        user_id: i32,
        product_id: i32,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        use entity::cart::Column;

        let result = entity::prelude::Cart::update_many()
            .col_expr(Column::Amount, Expr::value(amount))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a line.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted; `0` when the line did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::delete_many()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .filter(entity::cart::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every line in a user's cart with its product, oldest line first.
    pub async fn get_by_user_with_product(
        &self,
        user_id: i32,
    ) -> Result<Vec<(CartEntry, Product)>, DbErr> {
        let rows = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::CreatedAt)
            .order_by_asc(entity::cart::Column::ProductId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(line, product)| {
                product.map(|p| (CartEntry::from_entity(line), Product::from_entity(p)))
            })
            .collect())
    }
}
