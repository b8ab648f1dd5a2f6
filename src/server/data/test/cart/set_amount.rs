use super::*;

/// Tests overwriting the amount of a line.
///
/// Verifies that the stored amount is replaced, not accumulated.
///
/// Expected: Ok(1) and amount 4
#[tokio::test]
async fn overwrites_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;
    factory::create_cart_entry(db, buyer.id, product.id, 9).await?;

    let repo = CartRepository::new(db);
    let rows = repo.set_amount(buyer.id, product.id, 4, Utc::now()).await?;

    assert_eq!(rows, 1);
    assert_eq!(repo.find(buyer.id, product.id).await?.unwrap().amount, 4);

    Ok(())
}

/// Tests overwriting a line that does not exist.
///
/// Expected: Ok(0) and still no line
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
    let rows = repo.set_amount(buyer.id, product.id, 4, Utc::now()).await?;

    assert_eq!(rows, 0);
    assert!(repo.find(buyer.id, product.id).await?.is_none());

    Ok(())
}
