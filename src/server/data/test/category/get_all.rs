use super::*;

/// Tests listing every category.
///
/// Expected: Ok with categories ordered by id
#[tokio::test]
async fn returns_all_categories_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::category::CategoryFactory::new(db)
        .name("Interior")
        .build()
        .await?;
    let second = factory::category::CategoryFactory::new(db)
        .name("Exterior")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, first.id);
    assert_eq!(categories[0].name, "Interior");
    assert_eq!(categories[1].id, second.id);

    Ok(())
}
