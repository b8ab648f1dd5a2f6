//! Shared helper utilities for factory methods.
//!
//! ID generation used across all factories, and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a sellable product with its whole dependency chain.
///
/// Creates, with default values:
/// 1. User (the brand operator)
/// 2. Brand
/// 3. Product
/// 4. ProductStatistics row, zeroed
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, brand, product))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::brand::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let brand = crate::factory::brand::create_brand(db, user.id).await?;
    let product = crate::factory::product::create_product(db, brand.id).await?;
    crate::factory::product::create_product_statistics(db, product.id).await?;

    Ok((user, brand, product))
}

/// Creates a product under a new brand without a statistics row.
///
/// Used to exercise paths that must fail when the aggregate row is missing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(product)` - Created product
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_without_statistics(
    db: &DatabaseConnection,
) -> Result<entity::product::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let brand = crate::factory::brand::create_brand(db, user.id).await?;
    crate::factory::product::create_product(db, brand.id).await
}
