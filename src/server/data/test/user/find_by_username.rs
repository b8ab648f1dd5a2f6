use super::*;

/// Tests finding an account by username.
///
/// Verifies that the repository returns the matching account with its
/// credential columns.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("ferris01")
        .credentials("digest", "pepper")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("ferris01").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.password_hash, "digest");
    assert_eq!(user.salt, "pepper");

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("ghost").await?;

    assert!(user.is_none());

    Ok(())
}
