use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::product::Category;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every category ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets the categories a product is linked to, ordered by id.
    pub async fn get_for_product(&self, product_id: i32) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .join(
                JoinType::InnerJoin,
                entity::category::Relation::ProductCategory.def(),
            )
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}
