//! Catalog reads and product creation.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        brand::BrandRepository, category::CategoryRepository, product::ProductRepository,
        statistics::ProductStatisticsRepository, transaction::run_in_transaction,
    },
    error::AppError,
    model::product::{
        Brand, Category, CreateProductParams, CreateProductResult, GetProductsParam,
        ProductDetail, ProductPage,
    },
};

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new ProductService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a product with its brand name and categories.
    ///
    /// # Returns
    /// - `Ok(Some(ProductDetail))` - Product found
    /// - `Ok(None)` - No product with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_product(&self, id: i32) -> Result<Option<ProductDetail>, AppError> {
        let Some((product, brand)) = ProductRepository::new(self.db).find_with_brand(id).await?
        else {
            return Ok(None);
        };

        let categories = CategoryRepository::new(self.db)
            .get_for_product(product.id)
            .await?;

        Ok(Some(ProductDetail {
            product,
            brand_name: brand.map(|b| b.name).unwrap_or_default(),
            categories,
        }))
    }

    /// Gets one page of products, newest first, optionally restricted to a category.
    ///
    /// # Arguments
    /// - `param` - Zero-based page, page size (1 to [`MAX_PAGE_SIZE`]) and category filter
    ///
    /// # Returns
    /// - `Ok(ProductPage)` - Products on the page and the index of the last page
    /// - `Err(AppError::BadRequest)` - Page size out of range
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_products(&self, param: GetProductsParam) -> Result<ProductPage, AppError> {
        if param.page_size == 0 || param.page_size > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(param.page, param.page_size, param.category_id)
            .await?;

        Ok(ProductPage {
            products,
            max_page: total.saturating_sub(1) / param.page_size,
        })
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_brands_by_user(&self, user_id: i32) -> Result<Vec<Brand>, AppError> {
        Ok(BrandRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Creates a product, its category links and its zeroed statistics row together.
    ///
    /// Only the user operating the brand may list products under it.
    ///
    /// # Arguments
    /// - `owner_id` - User creating the product
    /// - `params` - Product fields and category ids
    ///
    /// # Returns
    /// - `Ok(CreateProductResult::Created(product))` - The created product
    /// - `Ok(CreateProductResult::BrandNotOwned)` - Brand missing or run by someone else
    /// - `Err(AppError::BadRequest)` - Negative price or stock
    /// - `Err(AppError::DbErr)` - Database error, including unknown category ids
    pub async fn create_product(
        &self,
        owner_id: i32,
        params: CreateProductParams,
    ) -> Result<CreateProductResult, AppError> {
        if params.price < 0 || params.amount < 0 {
            return Err(AppError::BadRequest(
                "price and amount must not be negative".to_string(),
            ));
        }

        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let brand = BrandRepository::new(txn).find_by_id(params.brand_id).await?;
                if !brand.is_some_and(|b| b.user_id == owner_id) {
                    tracing::debug!(
                        "User {} may not list products under brand {}",
                        owner_id,
                        params.brand_id
                    );
                    return Ok(CreateProductResult::BrandNotOwned);
                }

                let product = ProductRepository::new(txn).create(params, now).await?;
                ProductStatisticsRepository::new(txn)
                    .create_empty(product.id)
                    .await?;

                tracing::info!("Created product {} ({})", product.id, product.name);

                Ok(CreateProductResult::Created(product))
            })
        })
        .await
    }
}
