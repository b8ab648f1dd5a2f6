use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{AddReviewParams, Review};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review or reply.
    ///
    /// Does not touch statistics; the caller updates them in the same transaction.
    pub async fn create(
        &self,
        params: AddReviewParams,
        now: DateTime<Utc>,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            product_id: ActiveValue::Set(params.product_id),
            user_id: ActiveValue::Set(params.user_id),
            score: ActiveValue::Set(params.score),
            content: ActiveValue::Set(params.content),
            parent_review_id: ActiveValue::Set(params.parent_review_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Checks whether review `review_id` exists and was written for `product_id`.
    pub async fn exists_in_product(&self, review_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::Id.eq(review_id))
            .filter(entity::review::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all reviews of a product in insertion order.
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }
}
