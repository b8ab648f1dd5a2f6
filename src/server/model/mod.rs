//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary and
//! services exchange them with controllers. Each model converts to its API DTO with
//! `into_dto()`.

pub mod auth;
pub mod cart;
pub mod pbv;
pub mod product;
pub mod review;
pub mod user;
