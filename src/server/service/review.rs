//! Review & statistics aggregator.
//!
//! A review and its effect on the product's running totals are written in one
//! transaction: either both land or neither does.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        product::ProductRepository, review::ReviewRepository,
        statistics::ProductStatisticsRepository, transaction::run_in_transaction,
    },
    error::{internal::InternalError, AppError},
    model::review::{AddReviewParams, AddReviewResult, ProductStatistics, Review},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a review and folds its score into the product statistics.
    ///
    /// A reply (`parent_review_id != 0`) must point at a review of the same product.
    ///
    /// # Arguments
    /// - `params` - Author, product, score, parent and content
    ///
    /// # Returns
    /// - `Ok(AddReviewResult::Created(id))` - Review written and statistics updated
    /// - `Ok(AddReviewResult::ProductNotFound)` - Nothing written
    /// - `Ok(AddReviewResult::ParentReviewNotFound)` - Nothing written
    /// - `Err(AppError::InternalErr(MissingProductStatistics))` - Product has no
    ///   statistics row; the review insert is rolled back
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn add_review(&self, params: AddReviewParams) -> Result<AddReviewResult, AppError> {
        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let product_id = params.product_id;
                let score = params.score;

                if !ProductRepository::new(txn).exists(product_id).await? {
                    tracing::debug!("Review rejected: product {} not found", product_id);
                    return Ok(AddReviewResult::ProductNotFound);
                }

                let review_repo = ReviewRepository::new(txn);
                if params.parent_review_id != 0
                    && !review_repo
                        .exists_in_product(params.parent_review_id, product_id)
                        .await?
                {
                    tracing::debug!(
                        "Review rejected: parent {} not found on product {}",
                        params.parent_review_id,
                        product_id
                    );
                    return Ok(AddReviewResult::ParentReviewNotFound);
                }

                let review = review_repo.create(params, now).await?;

                let stats_repo = ProductStatisticsRepository::new(txn);
                if stats_repo.find(product_id).await?.is_none() {
                    return Err(InternalError::MissingProductStatistics { product_id }.into());
                }
                stats_repo.record_review(product_id, score).await?;

                Ok(AddReviewResult::Created(review.id))
            })
        })
        .await
    }

    /// Lists the reviews of a product in the order they were written.
    pub async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_product(product_id)
            .await?)
    }

    /// Gets the running totals of a product.
    ///
    /// # Returns
    /// - `Ok(Some(ProductStatistics))` - Totals found
    /// - `Ok(None)` - Product has no statistics row
    pub async fn get_statistics(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductStatistics>, AppError> {
        Ok(ProductStatisticsRepository::new(self.db)
            .find(product_id)
            .await?)
    }
}
