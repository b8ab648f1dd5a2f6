use super::*;

/// Tests fetching a product with its brand.
///
/// Expected: Ok(Some((product, Some(brand))))
#[tokio::test]
async fn returns_product_and_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let result = repo.find_with_brand(product.id).await?;

    assert!(result.is_some());
    let (found, found_brand) = result.unwrap();
    assert_eq!(found.id, product.id);
    assert_eq!(found.name, product.name);
    assert_eq!(found_brand.map(|b| b.name), Some(brand.name));

    Ok(())
}

/// Tests fetching a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.find_with_brand(42).await?;

    assert!(result.is_none());

    Ok(())
}
