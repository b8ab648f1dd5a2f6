use crate::server::{data::product::ProductRepository, model::product::CreateProductParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_brand;
mod get_paginated;
