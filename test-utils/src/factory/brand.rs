//! Brand factory for creating test brand entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brands with customizable fields.
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    email: String,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Brand {id}"`
    /// - email: `"brand{id}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user operating the brand
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Brand {}", id),
            email: format!("brand{}@example.com", id),
        }
    }

    /// Sets the brand name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the brand entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::brand::Model)` - Created brand entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        let now = Utc::now();
        entity::brand::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brand with default values for the given operator.
pub async fn create_brand(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db, user_id).build().await
}
