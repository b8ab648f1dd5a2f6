use super::*;

/// Tests detecting a taken nickname.
///
/// Verifies that the repository reports a nickname as taken once an account
/// with that nickname exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("rustacean")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.nickname_exists("rustacean").await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting a free nickname.
///
/// Verifies that the repository reports a nickname as free when only other
/// nicknames are in use.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unused_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.nickname_exists("nobody-uses-this").await?;

    assert!(!result);

    Ok(())
}

/// Tests that nickname matching is exact.
///
/// Verifies that a prefix of an existing nickname is not reported as taken.
///
/// Expected: Ok(false)
#[tokio::test]
async fn does_not_match_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("rustacean")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.nickname_exists("rust").await?);

    Ok(())
}
