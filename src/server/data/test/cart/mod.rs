use crate::server::data::cart::CartRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_user_with_product;
mod increment;
mod insert;
mod set_amount;
