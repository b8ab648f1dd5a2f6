use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_username;
mod nickname_exists;
mod username_exists;

fn create_params(nickname: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: format!("{}@example.com", username),
        nickname: nickname.to_string(),
        username: username.to_string(),
        password_hash: "digest".to_string(),
        salt: "salt".to_string(),
        now: Utc::now(),
    }
}
