//! PBV option factory for creating saved configurations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a PBV option row for `user_id` holding the JSON serialization of `data`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the configuration
/// - `data` - JSON document to store
///
/// # Returns
/// - `Ok(entity::pbv_option::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert, including a second row for the same user
pub async fn create_pbv_option(
    db: &DatabaseConnection,
    user_id: i32,
    data: &serde_json::Value,
) -> Result<entity::pbv_option::Model, DbErr> {
    create_pbv_option_raw(db, user_id, data.to_string().into_bytes()).await
}

/// Inserts a PBV option row with arbitrary stored bytes.
pub async fn create_pbv_option_raw(
    db: &DatabaseConnection,
    user_id: i32,
    data: Vec<u8>,
) -> Result<entity::pbv_option::Model, DbErr> {
    let now = Utc::now();
    entity::pbv_option::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        data: ActiveValue::Set(data),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
