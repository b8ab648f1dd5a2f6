//! Review factory for creating test reviews.
//!
//! Inserts the review row only; statistics are left untouched so tests can set up
//! arbitrary starting states.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    user_id: i32,
    score: i32,
    content: String,
    parent_review_id: i32,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - score: `5`
    /// - content: `"Review {id}"`
    /// - parent_review_id: `0` (top level)
    pub fn new(db: &'a DatabaseConnection, product_id: i32, user_id: i32) -> Self {
        Self {
            db,
            product_id,
            user_id,
            score: 5,
            content: format!("Review {}", next_id()),
            parent_review_id: 0,
        }
    }

    /// Sets the score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Makes this review a reply to `parent_review_id`.
    pub fn parent(mut self, parent_review_id: i32) -> Self {
        self.parent_review_id = parent_review_id;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            product_id: ActiveValue::Set(self.product_id),
            user_id: ActiveValue::Set(self.user_id),
            score: ActiveValue::Set(self.score),
            content: ActiveValue::Set(self.content),
            parent_review_id: ActiveValue::Set(self.parent_review_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, product_id, user_id).build().await
}
