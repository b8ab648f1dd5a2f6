use super::*;

/// Tests detecting a taken username.
///
/// Verifies that the repository reports a username as taken once an account
/// with that username exists, and as free otherwise.
///
/// Expected: Ok(true) for the taken name, Ok(false) for another
#[tokio::test]
async fn reports_taken_and_free_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("ferris01")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("ferris01").await?);
    assert!(!repo.username_exists("ferris02").await?);

    Ok(())
}
