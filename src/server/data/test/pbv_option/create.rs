use super::*;

/// Tests storing a user's option bytes.
///
/// Verifies that the bytes read back unchanged and the user is reported as
/// having options.
///
/// Expected: Ok(id) and identical bytes on read
#[tokio::test]
async fn stores_bytes_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PbvOptionRepository::new(db);
    assert!(!repo.exists_for_user(user.id).await?);

    let id = repo
        .create(user.id, br#"{"options":{}}"#.to_vec(), Utc::now())
        .await?;

    assert!(id > 0);
    assert!(repo.exists_for_user(user.id).await?);
    assert_eq!(
        repo.find_data_by_user(user.id).await?,
        Some(br#"{"options":{}}"#.to_vec())
    );

    Ok(())
}

/// Tests that a user holds at most one option row.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_second_row_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_pbv_option(db, user.id, &serde_json::json!({ "options": {} })).await?;

    let repo = PbvOptionRepository::new(db);
    let result = repo.create(user.id, b"{}".to_vec(), Utc::now()).await;

    assert!(result.is_err());

    Ok(())
}
