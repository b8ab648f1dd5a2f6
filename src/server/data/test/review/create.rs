use super::*;
use crate::server::data::statistics::ProductStatisticsRepository;

/// Tests writing a review.
///
/// Verifies that the review is stored with its fields and that the statistics
/// row is left untouched by the repository.
///
/// Expected: Ok(Review) and statistics still zero
#[tokio::test]
async fn creates_review_without_touching_statistics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(
            AddReviewParams {
                user_id: author.id,
                product_id: product.id,
                score: 4,
                parent_review_id: 0,
                content: "Fits my van".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert!(review.id > 0);
    assert_eq!(review.score, 4);
    assert_eq!(review.parent_review_id, 0);
    assert_eq!(review.content, "Fits my van");

    let stats = ProductStatisticsRepository::new(db)
        .find(product.id)
        .await?
        .unwrap();
    assert_eq!(stats.review_count, 0);

    Ok(())
}
