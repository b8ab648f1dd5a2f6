pub mod auth;
pub mod cart;
pub mod pbv;
pub mod product;
pub mod review;
