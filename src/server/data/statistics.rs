//! Product statistics repository.
//!
//! Aggregates are only ever changed with storage-level increments so concurrent writers
//! cannot lose each other's updates.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::review::ProductStatistics;

pub struct ProductStatisticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductStatisticsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a zeroed statistics row for a new product.
    ///
    /// # Returns
    /// - `Ok(ProductStatistics)` - The created row
    /// - `Err(DbErr)` - Database error, including a row that already exists
    pub async fn create_empty(&self, product_id: i32) -> Result<ProductStatistics, DbErr> {
        let entity = entity::product_statistics::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            review_count: ActiveValue::Set(0),
            sum_review_score: ActiveValue::Set(0),
            sold_quantity: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(ProductStatistics::from_entity(entity))
    }

    /// Gets the statistics row of a product.
    pub async fn find(&self, product_id: i32) -> Result<Option<ProductStatistics>, DbErr> {
        let entity = entity::prelude::ProductStatistics::find_by_id(product_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ProductStatistics::from_entity))
    }

    /// Adds one review with `score` to the aggregates.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; `0` when the product has no statistics row
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_review(&self, product_id: i32, score: i32) -> Result<u64, DbErr> {
        use entity::product_statistics::Column;

        let result = entity::prelude::ProductStatistics::update_many()
            .col_expr(Column::ReviewCount, Expr::col(Column::ReviewCount).add(1))
            .col_expr(
                Column::SumReviewScore,
                Expr::col(Column::SumReviewScore).add(score),
            )
            .filter(Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
