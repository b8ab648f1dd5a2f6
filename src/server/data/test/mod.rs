mod cart;
mod category;
mod pbv_option;
mod product;
mod review;
mod statistics;
mod transaction;
mod user;
