use super::*;

/// Tests finding an account by id.
///
/// Expected: Ok(Some(user)) for the created id, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_params("ferris", "ferris01")).await?;

    let user = repo.find_by_id(created.id).await?;
    assert_eq!(user.map(|u| u.username), Some("ferris01".to_string()));

    assert!(repo.find_by_id(created.id + 1).await?.is_none());

    Ok(())
}
