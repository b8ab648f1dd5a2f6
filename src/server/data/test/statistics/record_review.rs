use super::*;

/// Tests folding review scores into the aggregates.
///
/// Verifies that each recorded review bumps the count by one and the score sum
/// by its score.
///
/// Expected: count 3, sum 4 + 5 + 2 = 11
#[tokio::test]
async fn accumulates_count_and_sum() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductStatisticsRepository::new(db);
    for score in [4, 5, 2] {
        assert_eq!(repo.record_review(product.id, score).await?, 1);
    }

    let stats = repo.find(product.id).await?.unwrap();
    assert_eq!(stats.review_count, 3);
    assert_eq!(stats.sum_review_score, 11);
    assert_eq!(stats.sold_quantity, 0);

    Ok(())
}

/// Tests recording a review for a product without a statistics row.
///
/// Expected: Ok(0), nothing created
#[tokio::test]
async fn returns_zero_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::helpers::create_product_without_statistics(db).await?;

    let repo = ProductStatisticsRepository::new(db);

    assert_eq!(repo.record_review(product.id, 5).await?, 0);
    assert!(repo.find(product.id).await?.is_none());

    Ok(())
}
