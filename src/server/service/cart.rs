//! Cart merge engine.
//!
//! Adding a product that is already in the cart accumulates the quantity instead of
//! replacing it. Accumulation is a storage-level increment, so concurrent adds of the same
//! product never lose an update. An absent line and a line with zero quantity are the same
//! thing: a line is deleted rather than set to zero.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::server::{
    data::{
        brand::BrandRepository, cart::CartRepository, product::ProductRepository,
        transaction::{is_unique_violation, run_in_transaction},
    },
    error::AppError,
    model::cart::{CartEntry, CartItem},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    /// Creates a new CartService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `amount` units of a product to a user's cart.
    ///
    /// A product that does not exist is silently ignored. If the product disappears after
    /// that check, the cart's foreign key rejects the insert and the error propagates.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the cart
    /// - `product_id` - Product to add
    /// - `amount` - Units to add, must be positive
    ///
    /// # Returns
    /// - `Ok(Some(CartEntry))` - The line after merging
    /// - `Ok(None)` - Product does not exist, nothing written
    /// - `Err(AppError::BadRequest)` - Non-positive amount
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn add_to_cart(
        &self,
        user_id: i32,
        product_id: i32,
        amount: i64,
    ) -> Result<Option<CartEntry>, AppError> {
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "amount must be greater than 0".to_string(),
            ));
        }

        if !ProductRepository::new(self.db).exists(product_id).await? {
            tracing::debug!(
                "Ignoring add to cart for missing product {} by user {}",
                product_id,
                user_id
            );
            return Ok(None);
        }

        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let cart_repo = CartRepository::new(txn);

                if cart_repo.find(user_id, product_id).await?.is_some() {
                    cart_repo.increment(user_id, product_id, amount, now).await?;
                    return Ok(cart_repo.find(user_id, product_id).await?);
                }

                insert_or_merge(txn, user_id, product_id, amount, now).await
            })
        })
        .await
    }

    /// Overwrites the quantity of a cart line.
    ///
    /// A missing line is left missing. An amount of zero or less removes the line.
    ///
    /// # Returns
    /// - `Ok(())` - Line updated, removed, or absent
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn update_cart_amount(
        &self,
        user_id: i32,
        product_id: i32,
        amount: i64,
    ) -> Result<(), AppError> {
        let now = Utc::now();

        run_in_transaction::<_, _, _, AppError>(self.db, move |txn| {
            Box::pin(async move {
                let cart_repo = CartRepository::new(txn);

                if cart_repo.find(user_id, product_id).await?.is_none() {
                    tracing::debug!(
                        "Ignoring amount update for product {} not in cart of user {}",
                        product_id,
                        user_id
                    );
                    return Ok(());
                }

                if amount <= 0 {
                    cart_repo.delete(user_id, product_id).await?;
                } else {
                    cart_repo.set_amount(user_id, product_id, amount, now).await?;
                }

                Ok(())
            })
        })
        .await
    }

    /// Removes a product from a user's cart. Idempotent.
    pub async fn delete_from_cart(&self, user_id: i32, product_id: i32) -> Result<(), AppError> {
        CartRepository::new(self.db)
            .delete(user_id, product_id)
            .await?;

        Ok(())
    }

    /// Lists a user's cart with product names, prices and brands.
    pub async fn get_cart(&self, user_id: i32) -> Result<Vec<CartItem>, AppError> {
        let lines = CartRepository::new(self.db)
            .get_by_user_with_product(user_id)
            .await?;

        let mut brand_ids: Vec<i32> = lines.iter().map(|(_, p)| p.brand_id).collect();
        brand_ids.sort_unstable();
        brand_ids.dedup();

        let brand_names: HashMap<i32, String> = BrandRepository::new(self.db)
            .get_by_ids(brand_ids)
            .await?
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect();

        Ok(lines
            .into_iter()
            .map(|(line, product)| CartItem {
                product_id: line.product_id,
                brand_name: brand_names
                    .get(&product.brand_id)
                    .cloned()
                    .unwrap_or_default(),
                product_name: product.name,
                price: product.price,
                amount: line.amount,
            })
            .collect())
    }
}

/// Inserts a new cart line, merging into the existing one if the insert collides.
///
/// The insert runs in a savepoint, so a unique violation from a line written by a
/// concurrent add leaves `txn` usable and the amount is added to that line instead.
pub(crate) async fn insert_or_merge(
    txn: &DatabaseTransaction,
    user_id: i32,
    product_id: i32,
    amount: i64,
    now: DateTime<Utc>,
) -> Result<Option<CartEntry>, AppError> {
    let inserted = run_in_transaction::<_, _, _, AppError>(txn, move |savepoint| {
        Box::pin(async move {
            let entry = CartRepository::new(savepoint)
                .insert(user_id, product_id, amount, now)
                .await?;
            Ok(entry)
        })
    })
    .await;

    match inserted {
        Ok(entry) => return Ok(Some(entry)),
        Err(AppError::DbErr(err)) if is_unique_violation(&err) => {
            tracing::debug!(
                "Concurrent first add for user {} product {}, merging",
                user_id,
                product_id
            );
        }
        Err(err) => return Err(err),
    }

    let cart_repo = CartRepository::new(txn);
    cart_repo.increment(user_id, product_id, amount, now).await?;

    Ok(cart_repo.find(user_id, product_id).await?)
}
