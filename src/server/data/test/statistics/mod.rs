use crate::server::data::statistics::ProductStatisticsRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_empty;
mod record_review;
