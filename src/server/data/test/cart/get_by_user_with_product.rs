use super::*;

/// Tests listing a user's cart with products.
///
/// Verifies that every line of the user is returned joined with its product and
/// that lines of other users are excluded.
///
/// Expected: Ok with two lines carrying product names and prices
#[tokio::test]
async fn returns_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let brand = factory::create_brand(db, seller.id).await?;
    let lamp = factory::product::ProductFactory::new(db, brand.id)
        .name("Lamp")
        .price(1200)
        .build()
        .await?;
    let desk = factory::product::ProductFactory::new(db, brand.id)
        .name("Desk")
        .price(45000)
        .build()
        .await?;

    let buyer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_cart_entry(db, buyer.id, lamp.id, 2).await?;
    factory::create_cart_entry(db, buyer.id, desk.id, 1).await?;
    factory::create_cart_entry(db, other.id, lamp.id, 7).await?;

    let repo = CartRepository::new(db);
    let mut lines = repo.get_by_user_with_product(buyer.id).await?;
    lines.sort_by_key(|(line, _)| line.product_id);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0.product_id, lamp.id);
    assert_eq!(lines[0].0.amount, 2);
    assert_eq!(lines[0].1.name, "Lamp");
    assert_eq!(lines[0].1.price, 1200);
    assert_eq!(lines[1].1.name, "Desk");
    assert!(lines.iter().all(|(line, _)| line.user_id == buyer.id));

    Ok(())
}

/// Tests listing an empty cart.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_empty_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::create_user(db).await?;

    let repo = CartRepository::new(db);
    let lines = repo.get_by_user_with_product(buyer.id).await?;

    assert!(lines.is_empty());

    Ok(())
}
