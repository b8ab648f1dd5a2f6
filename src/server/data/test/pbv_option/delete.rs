use super::*;

/// Tests deleting a user's options.
///
/// Verifies that only the targeted user's row is removed.
///
/// Expected: Ok(1), other user's row kept
#[tokio::test]
async fn deletes_only_own_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::pbv_option::create_pbv_option_raw(db, owner.id, b"a".to_vec()).await?;
    factory::pbv_option::create_pbv_option_raw(db, other.id, b"b".to_vec()).await?;

    let repo = PbvOptionRepository::new(db);

    assert_eq!(repo.delete(owner.id).await?, 1);
    assert!(!repo.exists_for_user(owner.id).await?);
    assert!(repo.exists_for_user(other.id).await?);
    assert_eq!(repo.delete(owner.id).await?, 0);

    Ok(())
}
