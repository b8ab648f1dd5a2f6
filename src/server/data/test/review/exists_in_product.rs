use super::*;

/// Tests finding a parent review on the same product.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_same_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;
    let review = factory::create_review(db, product.id, author.id).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists_in_product(review.id, product.id).await?);

    Ok(())
}

/// Tests that a review of another product does not qualify.
///
/// Verifies that a reply cannot attach to a review written for a different
/// product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reviewed) = factory::helpers::create_product_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_product_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;
    let review = factory::create_review(db, reviewed.id, author.id).await?;

    let repo = ReviewRepository::new(db);

    assert!(!repo.exists_in_product(review.id, other.id).await?);
    assert!(!repo.exists_in_product(review.id + 100, reviewed.id).await?);

    Ok(())
}
