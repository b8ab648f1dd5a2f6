//! Review and product statistics domain models.

use chrono::{DateTime, Utc};

use crate::model::{
    api::{CodeDto, CODE_FIRST_KIND, CODE_SECOND_KIND},
    review::{AddReviewDto, ProductStatisticsDto, ReviewDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub score: i32,
    pub content: String,
    /// `0` for a top-level review.
    pub parent_review_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            score: entity.score,
            content: entity.content,
            parent_review_id: entity.parent_review_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            product_id: self.product_id,
            user_id: self.user_id,
            score: self.score,
            content: self.content,
            parent_review_id: self.parent_review_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddReviewParams {
    pub user_id: i32,
    pub product_id: i32,
    /// 1 to 5, validated by the caller.
    pub score: i32,
    pub parent_review_id: i32,
    pub content: String,
}

impl AddReviewParams {
    pub fn from_dto(user_id: i32, dto: AddReviewDto) -> Self {
        Self {
            user_id,
            product_id: dto.product_id,
            score: dto.score,
            parent_review_id: dto.parent_review_id,
            content: dto.content,
        }
    }
}

/// Outcome of writing a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddReviewResult {
    Created(i32),
    /// Nothing written; the product does not exist.
    ProductNotFound,
    /// Nothing written; the parent does not exist or belongs to another product.
    ParentReviewNotFound,
}

impl AddReviewResult {
    pub fn into_dto(self) -> CodeDto {
        match self {
            Self::Created(id) => CodeDto::created(id),
            Self::ProductNotFound => CodeDto::code(CODE_FIRST_KIND),
            Self::ParentReviewNotFound => CodeDto::code(CODE_SECOND_KIND),
        }
    }
}

/// Running aggregates for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStatistics {
    pub product_id: i32,
    pub review_count: i64,
    pub sum_review_score: i64,
    pub sold_quantity: i64,
}

impl ProductStatistics {
    pub fn from_entity(entity: entity::product_statistics::Model) -> Self {
        Self {
            product_id: entity.product_id,
            review_count: entity.review_count,
            sum_review_score: entity.sum_review_score,
            sold_quantity: entity.sold_quantity,
        }
    }

    /// Mean review score, `0.0` before the first review.
    pub fn average_score(&self) -> f64 {
        if self.review_count == 0 {
            return 0.0;
        }
        self.sum_review_score as f64 / self.review_count as f64
    }

    pub fn into_dto(self) -> ProductStatisticsDto {
        ProductStatisticsDto {
            average_score: self.average_score(),
            product_id: self.product_id,
            review_count: self.review_count,
            sum_review_score: self.sum_review_score,
            sold_quantity: self.sold_quantity,
        }
    }
}
