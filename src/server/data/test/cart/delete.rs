use super::*;

/// Tests deleting a cart line.
///
/// Verifies that the line is removed and a repeated delete is a no-op.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn deletes_line_idempotently() -> Result<(), DbErr> {
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

    assert_eq!(repo.delete(buyer.id, product.id).await?, 1);
    assert!(repo.find(buyer.id, product.id).await?.is_none());
    assert_eq!(repo.delete(buyer.id, product.id).await?, 0);

    Ok(())
}
