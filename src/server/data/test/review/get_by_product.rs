use super::*;

/// Tests listing the reviews of a product.
///
/// Verifies that reviews and replies of the product are returned in insertion
/// order and reviews of other products are excluded.
///
/// Expected: Ok with the two reviews of the product
#[tokio::test]
async fn returns_reviews_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_product_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;

    let top = factory::create_review(db, product.id, author.id).await?;
    factory::create_review(db, other.id, author.id).await?;
    let reply = factory::review::ReviewFactory::new(db, product.id, author.id)
        .parent(top.id)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_product(product.id).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, top.id);
    assert_eq!(reviews[1].id, reply.id);
    assert_eq!(reviews[1].parent_review_id, top.id);

    Ok(())
}
