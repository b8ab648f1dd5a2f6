//! PBV option repository.
//!
//! Stores and returns the raw serialized bytes. Encoding and decoding belong to
//! `PbvService`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct PbvOptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PbvOptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists_for_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PbvOption::find()
            .filter(entity::pbv_option::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the stored bytes for a user, if any.
    pub async fn find_data_by_user(&self, user_id: i32) -> Result<Option<Vec<u8>>, DbErr> {
        let entity = entity::prelude::PbvOption::find()
            .filter(entity::pbv_option::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.data))
    }

    /// Inserts the user's row and returns its id.
    pub async fn create(
        &self,
        user_id: i32,
        data: Vec<u8>,
        now: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let entity = entity::pbv_option::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            data: ActiveValue::Set(data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Replaces the stored bytes; returns rows updated.
    pub async fn update(
        &self,
        user_id: i32,
        data: Vec<u8>,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::PbvOption::update_many()
            .col_expr(
                entity::pbv_option::Column::Data,
                sea_orm::sea_query::Expr::value(data),
            )
            .col_expr(
                entity::pbv_option::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(entity::pbv_option::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the user's row; returns rows deleted.
    pub async fn delete(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PbvOption::delete_many()
            .filter(entity::pbv_option::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
