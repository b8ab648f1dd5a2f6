use super::*;
use sea_orm::SqlErr;

/// Tests inserting a new cart line.
///
/// Verifies that the repository stores the line with the given amount and
/// that it can be read back by its composite key.
///
/// Expected: Ok(CartEntry) with amount 3
#[tokio::test]
async fn inserts_new_line() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;

    let repo = CartRepository::new(db);
    let entry = repo.insert(buyer.id, product.id, 3, Utc::now()).await?;

    assert_eq!(entry.user_id, buyer.id);
    assert_eq!(entry.product_id, product.id);
    assert_eq!(entry.amount, 3);

    let stored = repo.find(buyer.id, product.id).await?;
    assert_eq!(stored.map(|e| e.amount), Some(3));

    Ok(())
}

/// Tests inserting a line that already exists.
///
/// Verifies that a second insert for the same user and product fails with a
/// unique violation rather than overwriting the first line.
///
/// Expected: Err(DbErr) with UniqueConstraintViolation
#[tokio::test]
async fn fails_for_existing_line() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;
    factory::create_cart_entry(db, buyer.id, product.id, 1).await?;

    let repo = CartRepository::new(db);
    let result = repo.insert(buyer.id, product.id, 5, Utc::now()).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.find(buyer.id, product.id).await?.unwrap().amount, 1);

    Ok(())
}

/// Tests inserting a line for a product that does not exist.
///
/// Verifies that the foreign key rejects the line instead of creating a dangling
/// cart entry.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::create_user(db).await?;

    let repo = CartRepository::new(db);
    let result = repo.insert(buyer.id, 999_999, 1, Utc::now()).await;

    assert!(result.is_err());
    assert!(repo.find(buyer.id, 999_999).await?.is_none());

    Ok(())
}
