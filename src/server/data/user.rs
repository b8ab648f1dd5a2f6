//! User data repository for database operations.
//!
//! Provides the `UserRepository` used by registration and login. Uniqueness of nickname
//! and username is enforced by the schema; the `*_exists` checks are the fast path that
//! lets the service report a conflict without attempting the insert.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether any account uses `nickname`.
    ///
    /// # Returns
    /// - `Ok(true)` - Nickname is taken
    /// - `Ok(false)` - Nickname is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn nickname_exists(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any account uses `username`.
    ///
    /// # Returns
    /// - `Ok(true)` - Username is taken
    /// - `Ok(false)` - Username is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new account.
    ///
    /// Both timestamps are set to `params.now`.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on nickname or username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(params.email),
            nickname: ActiveValue::Set(params.nickname),
            username: ActiveValue::Set(params.username),
            password: ActiveValue::Set(params.password_hash),
            salt: ActiveValue::Set(params.salt),
            created_at: ActiveValue::Set(params.now),
            updated_at: ActiveValue::Set(params.now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an account by username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found, including stored credentials
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }
}
