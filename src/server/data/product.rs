//! Product data repository.
//!
//! Reads used for existence checks and catalog listings, and the product half of catalog
//! creation. The statistics row that must accompany every product is written by
//! `ProductStatisticsRepository` in the same transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::product::{Brand, CreateProductParams, Product};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a product exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Product exists
    /// - `Ok(false)` - No product with that id
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a product together with the brand selling it.
    ///
    /// # Returns
    /// - `Ok(Some((Product, Option<Brand>)))` - Product found; brand is `None` only if the
    ///   foreign key was bypassed
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_brand(
        &self,
        id: i32,
    ) -> Result<Option<(Product, Option<Brand>)>, DbErr> {
        let result = entity::prelude::Product::find_by_id(id)
            .find_also_related(entity::prelude::Brand)
            .one(self.db)
            .await?;

        Ok(result.map(|(product, brand)| {
            (Product::from_entity(product), brand.map(Brand::from_entity))
        }))
    }

    /// Gets one page of products, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `page_size` - Products per page, must be non-zero
    /// - `category_id` - Restrict to one category; `0` lists all products
    ///
    /// # Returns
    /// - `Ok((Vec<Product>, u64))` - Products on the page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        page_size: u64,
        category_id: i32,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find();
        if category_id != 0 {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::product::Relation::ProductCategory.def(),
                )
                .filter(entity::product_category::Column::CategoryId.eq(category_id));
        }

        let paginator = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page).await?;

        Ok((
            products.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }

    /// Inserts a product and links it to its categories.
    ///
    /// # Arguments
    /// - `params` - Product fields and category ids
    /// - `now` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(DbErr)` - Database error, including unknown brand or category ids
    pub async fn create(
        &self,
        params: CreateProductParams,
        now: DateTime<Utc>,
    ) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            brand_id: ActiveValue::Set(params.brand_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            amount: ActiveValue::Set(params.amount),
            title_image: ActiveValue::Set(params.title_image),
            description_asset: ActiveValue::Set(params.description_asset),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        if !params.category_ids.is_empty() {
            let links = params.category_ids.into_iter().map(|category_id| {
                entity::product_category::ActiveModel {
                    product_id: ActiveValue::Set(product.id),
                    category_id: ActiveValue::Set(category_id),
                }
            });
            entity::prelude::ProductCategory::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(Product::from_entity(product))
    }
}
