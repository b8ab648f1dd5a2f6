//! Business logic layer.
//!
//! Each service borrows the shared connection pool and exposes the operations a controller
//! calls. Operations that read and write several rows open one transaction through
//! [`crate::server::data::transaction::run_in_transaction`] and only touch storage through
//! the transaction handle inside it.

pub mod auth;
pub mod cart;
pub mod pbv;
pub mod product;
pub mod review;

#[cfg(test)]
mod test;
