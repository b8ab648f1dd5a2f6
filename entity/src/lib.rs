//! SeaORM entity definitions for the commerce database.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its table-level
//! name so callers can write `entity::prelude::Cart::find()`.

pub mod prelude;

pub mod brand;
pub mod cart;
pub mod category;
pub mod pbv_option;
pub mod product;
pub mod product_category;
pub mod product_statistics;
pub mod review;
pub mod user;
