//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories take the ids of
//! the rows they reference; `helpers` builds whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (seller, brand, product) = factory::helpers::create_product_with_dependencies(&db).await?;
//!     let line = factory::create_cart_entry(&db, user.id, product.id, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Registered accounts
//! - `brand` - Seller brands
//! - `category` - Catalog categories
//! - `product` - Products, optionally with their statistics row
//! - `cart` - Cart lines
//! - `review` - Reviews and replies
//! - `pbv_option` - Saved PBV configurations
//! - `helpers` - ID generation and dependency chains

pub mod brand;
pub mod cart;
pub mod category;
pub mod helpers;
pub mod pbv_option;
pub mod product;
pub mod review;
pub mod user;

pub use brand::create_brand;
pub use cart::create_cart_entry;
pub use category::create_category;
pub use pbv_option::create_pbv_option;
pub use product::{create_product, create_product_statistics};
pub use review::create_review;
pub use user::create_user;
