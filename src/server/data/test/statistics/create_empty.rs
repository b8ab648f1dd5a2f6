use super::*;

/// Tests creating a zeroed statistics row.
///
/// Expected: Ok with every counter at zero, then Err on a second insert
#[tokio::test]
async fn creates_zeroed_row_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::helpers::create_product_without_statistics(db).await?;

    let repo = ProductStatisticsRepository::new(db);
    let stats = repo.create_empty(product.id).await?;

    assert_eq!(stats.product_id, product.id);
    assert_eq!(stats.review_count, 0);
    assert_eq!(stats.sum_review_score, 0);
    assert_eq!(stats.sold_quantity, 0);

    assert!(repo.create_empty(product.id).await.is_err());

    Ok(())
}
