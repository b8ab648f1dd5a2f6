use crate::server::{
    data::{transaction::run_in_transaction, user::UserRepository},
    error::AppError,
    model::user::CreateUserParams,
};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use test_utils::builder::TestBuilder;


fn create_params(nickname: &str) -> CreateUserParams {
    CreateUserParams {
        email: format!("{}@example.com", nickname),
        nickname: nickname.to_string(),
        username: format!("{}user", nickname),
        password_hash: "digest".to_string(),
        salt: "salt".to_string(),
        now: Utc::now(),
    }
}
