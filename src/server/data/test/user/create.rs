use super::*;
use sea_orm::{EntityTrait, PaginatorTrait, SqlErr};

/// Tests creating a new account.
///
/// Verifies that the repository stores every field and assigns an id.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("ferris", "ferris01")).await?;

    assert!(user.id > 0);
    assert_eq!(user.nickname, "ferris");
    assert_eq!(user.username, "ferris01");
    assert_eq!(user.email, "ferris01@example.com");
    assert_eq!(user.password_hash, "digest");
    assert_eq!(user.salt, "salt");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the schema rejecting a duplicate nickname.
///
/// Verifies that inserting a second account with an existing nickname fails
/// with a unique violation naming the nickname column, and that no second row
/// is written.
///
/// Expected: Err(DbErr) with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ferris", "ferris01")).await?;

    let result = repo.create(create_params("ferris", "ferris02")).await;

    assert!(result.is_err());
    match result.unwrap_err().sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            assert!(message.contains("nickname"));
        }
        other => panic!("Expected unique violation, got {:?}", other),
    }

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests the schema rejecting a duplicate username.
///
/// Expected: Err(DbErr) with UniqueConstraintViolation naming username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ferris", "ferris01")).await?;

    let result = repo.create(create_params("crab", "ferris01")).await;

    match result.unwrap_err().sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            assert!(message.contains("username"));
        }
        other => panic!("Expected unique violation, got {:?}", other),
    }

    Ok(())
}
