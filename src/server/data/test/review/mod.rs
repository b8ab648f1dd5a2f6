use crate::server::{data::review::ReviewRepository, model::review::AddReviewParams};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_in_product;
mod get_by_product;
