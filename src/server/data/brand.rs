use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::product::Brand;

pub struct BrandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all brands operated by a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Brand>, DbErr> {
        let brands = entity::prelude::Brand::find()
            .filter(entity::brand::Column::UserId.eq(user_id))
            .order_by_asc(entity::brand::Column::Id)
            .all(self.db)
            .await?;

        Ok(brands.into_iter().map(Brand::from_entity).collect())
    }

    /// Gets the brands with the given ids, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Brand>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let brands = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(brands.into_iter().map(Brand::from_entity).collect())
    }

    /// Gets a brand by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        let brand = entity::prelude::Brand::find_by_id(id).one(self.db).await?;

        Ok(brand.map(Brand::from_entity))
    }
}
