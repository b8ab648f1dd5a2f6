//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Server-side domain models convert
//! to these with `into_dto()` and parameter types are built from them with `from_dto()`.

pub mod api;
pub mod auth;
pub mod cart;
pub mod pbv;
pub mod product;
pub mod review;
