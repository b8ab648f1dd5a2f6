//! Product factory for creating test product entities.
//!
//! Products created here have no statistics row unless `with_statistics()` is used or
//! `create_product_statistics` is called separately.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db, brand.id)
///     .name("Truck")
///     .price(12_000)
///     .categories(vec![category.id])
///     .with_statistics()
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
    price: i64,
    amount: i64,
    created_at: DateTime<Utc>,
    categories: Vec<i32>,
    statistics: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - price: `1000`
    /// - amount: `10`
    /// - created_at: now
    /// - no categories, no statistics row
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `brand_id` - ID of the brand selling the product
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            name: format!("Product {}", next_id()),
            price: 1000,
            amount: 10,
            created_at: Utc::now(),
            categories: Vec::new(),
            statistics: false,
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the creation time, used to control listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Links the product to the given categories.
    pub fn categories(mut self, categories: Vec<i32>) -> Self {
        self.categories = categories;
        self
    }

    /// Also inserts a zeroed statistics row for the product.
    pub fn with_statistics(mut self) -> Self {
        self.statistics = true;
        self
    }

    /// Builds and inserts the product and any configured companion rows.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            brand_id: ActiveValue::Set(self.brand_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            amount: ActiveValue::Set(self.amount),
            title_image: ActiveValue::Set(String::new()),
            description_asset: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        if !self.categories.is_empty() {
            let links = self
                .categories
                .into_iter()
                .map(|category_id| entity::product_category::ActiveModel {
                    product_id: ActiveValue::Set(product.id),
                    category_id: ActiveValue::Set(category_id),
                });
            entity::prelude::ProductCategory::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        if self.statistics {
            create_product_statistics(self.db, product.id).await?;
        }

        Ok(product)
    }
}

/// Creates a product with default values under the given brand.
pub async fn create_product(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, brand_id).build().await
}

/// Inserts a zeroed statistics row for a product.
pub async fn create_product_statistics(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::product_statistics::Model, DbErr> {
    entity::product_statistics::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        review_count: ActiveValue::Set(0),
        sum_review_score: ActiveValue::Set(0),
        sold_quantity: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}
