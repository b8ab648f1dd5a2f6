use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_for_product;
