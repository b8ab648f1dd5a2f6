//! User domain model.

use chrono::{DateTime, Utc};

use crate::model::auth::UserDto;

/// Registered account including its stored credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub username: String,
    /// Hex salted SHA-256 digest.
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            username: entity.username,
            password_hash: entity.password,
            salt: entity.salt,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to the public DTO; credentials are dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            nickname: self.nickname,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

/// Row values for a new account, credentials already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub nickname: String,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub now: DateTime<Utc>,
}
