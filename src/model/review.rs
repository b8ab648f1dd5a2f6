use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct AddReviewDto {
    pub product_id: i32,
    pub score: i32,
    pub content: String,
    /// `0` for a top-level review.
    #[serde(default)]
    pub parent_review_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ReviewDto {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub score: i32,
    pub content: String,
    pub parent_review_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReviewsDto {
    pub code: i32,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductStatisticsDto {
    pub product_id: i32,
    pub review_count: i64,
    pub sum_review_score: i64,
    pub average_score: f64,
    pub sold_quantity: i64,
}
