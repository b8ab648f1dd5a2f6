//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries for one table (or one aggregate) and return
//! domain models from `server::model`. Each repository borrows any `ConnectionTrait`, so
//! the same code runs against the pool or inside a transaction handed out by
//! [`transaction::run_in_transaction`].

pub mod brand;
pub mod cart;
pub mod category;
pub mod pbv_option;
pub mod product;
pub mod review;
pub mod statistics;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
