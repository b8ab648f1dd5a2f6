use super::*;

/// Tests replacing stored option bytes.
///
/// Expected: Ok(1) and the new bytes on read
#[tokio::test]
async fn replaces_bytes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::pbv_option::create_pbv_option_raw(db, user.id, b"old".to_vec()).await?;

    let repo = PbvOptionRepository::new(db);
    let rows = repo.update(user.id, b"new".to_vec(), Utc::now()).await?;

    assert_eq!(rows, 1);
    assert_eq!(repo.find_data_by_user(user.id).await?, Some(b"new".to_vec()));

    Ok(())
}

/// Tests updating a user without options.
///
/// Expected: Ok(0) and still nothing stored
#[tokio::test]
async fn returns_zero_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PbvOptionRepository::new(db);

    assert_eq!(repo.update(user.id, b"new".to_vec(), Utc::now()).await?, 0);
    assert!(repo.find_data_by_user(user.id).await?.is_none());

    Ok(())
}
