use super::*;

/// Tests listing the categories of one product.
///
/// Verifies that only categories linked to the product are returned.
///
/// Expected: Ok with the single linked category
#[tokio::test]
async fn returns_linked_categories_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let brand = factory::create_brand(db, seller.id).await?;
    let linked = factory::create_category(db).await?;
    factory::create_category(db).await?;

    let product = factory::product::ProductFactory::new(db, brand.id)
        .categories(vec![linked.id])
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_for_product(product.id).await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, linked.id);

    Ok(())
}
