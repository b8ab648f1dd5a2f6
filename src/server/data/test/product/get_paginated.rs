use super::*;

/// Tests that listing is newest first and split into pages.
///
/// Verifies that five products created an hour apart come back newest first,
/// two per page, with the total count reported on every page.
///
/// Expected: pages [4,3], [2,1], [0] and total 5
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let brand = factory::create_brand(db, seller.id).await?;
    let start = Utc::now() - Duration::days(1);

    let mut ids = Vec::new();
    for i in 0..5 {
        let product = factory::product::ProductFactory::new(db, brand.id)
            .created_at(start + Duration::hours(i))
            .build()
            .await?;
        ids.push(product.id);
    }

    let repo = ProductRepository::new(db);

    let (first, total) = repo.get_paginated(0, 2, 0).await?;
    let (second, _) = repo.get_paginated(1, 2, 0).await?;
    let (third, _) = repo.get_paginated(2, 2, 0).await?;

    assert_eq!(total, 5);
    assert_eq!(
        first.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![ids[4], ids[3]]
    );
    assert_eq!(
        second.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );
    assert_eq!(third.iter().map(|p| p.id).collect::<Vec<_>>(), vec![ids[0]]);

    Ok(())
}

/// Tests filtering the listing by category.
///
/// Verifies that only products linked to the requested category are listed and
/// counted.
///
/// Expected: one product, total 1
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let brand = factory::create_brand(db, seller.id).await?;
    let chairs = factory::create_category(db).await?;
    let tables = factory::create_category(db).await?;

    let chair = factory::product::ProductFactory::new(db, brand.id)
        .categories(vec![chairs.id])
        .build()
        .await?;
    factory::product::ProductFactory::new(db, brand.id)
        .categories(vec![tables.id])
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo.get_paginated(0, 10, chairs.id).await?;

    assert_eq!(total, 1);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, chair.id);

    Ok(())
}

/// Tests a page past the end.
///
/// Expected: empty page, total still reported
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo.get_paginated(3, 10, 0).await?;

    assert!(products.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
