use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct SignUpDto {
    pub email: String,
    pub nickname: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub code: i32,
    /// Empty unless `code` is success.
    pub token: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
