use super::*;

/// Tests accumulating onto an existing line.
///
/// Verifies that increment adds to the stored amount instead of replacing it.
///
/// Expected: Ok(1) and amount 2 + 5 = 7
#[tokio::test]
async fn adds_to_existing_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;
    factory::create_cart_entry(db, buyer.id, product.id, 2).await?;

    let repo = CartRepository::new(db);
    let rows = repo.increment(buyer.id, product.id, 5, Utc::now()).await?;

    assert_eq!(rows, 1);
    assert_eq!(repo.find(buyer.id, product.id).await?.unwrap().amount, 7);

    Ok(())
}

/// Tests incrementing a line that does not exist.
///
/// Verifies that nothing is created.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_line() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;

    let repo = CartRepository::new(db);
    let rows = repo.increment(buyer.id, product.id, 5, Utc::now()).await?;

    assert_eq!(rows, 0);
    assert!(repo.find(buyer.id, product.id).await?.is_none());

    Ok(())
}

/// Tests that increment only touches the targeted line.
///
/// Expected: other users' lines for the same product keep their amount
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_cart_entry(db, first.id, product.id, 1).await?;
    factory::create_cart_entry(db, second.id, product.id, 1).await?;

    let repo = CartRepository::new(db);
    repo.increment(first.id, product.id, 4, Utc::now()).await?;

    assert_eq!(repo.find(first.id, product.id).await?.unwrap().amount, 5);
    assert_eq!(repo.find(second.id, product.id).await?.unwrap().amount, 1);

    Ok(())
}
