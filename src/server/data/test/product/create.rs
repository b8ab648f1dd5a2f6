use super::*;
use crate::server::data::category::CategoryRepository;

/// Tests creating a product with category links.
///
/// Verifies that the product is stored and linked to every requested category.
///
/// Expected: Ok(Product) with both categories attached
#[tokio::test]
async fn creates_product_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let brand = factory::create_brand(db, seller.id).await?;
    let first = factory::create_category(db).await?;
    let second = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo
        .create(
            CreateProductParams {
                brand_id: brand.id,
                name: "Camper shell".to_string(),
                price: 3_500_000,
                amount: 4,
                title_image: "shell.png".to_string(),
                description_asset: "shell.md".to_string(),
                category_ids: vec![first.id, second.id],
            },
            Utc::now(),
        )
        .await?;

    assert!(product.id > 0);
    assert_eq!(product.brand_id, brand.id);
    assert_eq!(product.price, 3_500_000);

    let categories = CategoryRepository::new(db)
        .get_for_product(product.id)
        .await?;
    assert_eq!(
        categories.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests creating a product for a brand that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .create(
            CreateProductParams {
                brand_id: 77,
                name: "Orphan".to_string(),
                price: 1,
                amount: 1,
                title_image: String::new(),
                description_asset: String::new(),
                category_ids: Vec::new(),
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
