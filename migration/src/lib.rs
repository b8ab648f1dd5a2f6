pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_brand_table;
mod m20260301_000003_create_category_table;
mod m20260301_000004_create_product_table;
mod m20260301_000005_create_product_category_table;
mod m20260301_000006_create_product_statistics_table;
mod m20260302_000007_create_cart_table;
mod m20260302_000008_create_review_table;
mod m20260310_000009_create_pbv_option_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_brand_table::Migration),
            Box::new(m20260301_000003_create_category_table::Migration),
            Box::new(m20260301_000004_create_product_table::Migration),
            Box::new(m20260301_000005_create_product_category_table::Migration),
            Box::new(m20260301_000006_create_product_statistics_table::Migration),
            Box::new(m20260302_000007_create_cart_table::Migration),
            Box::new(m20260302_000008_create_review_table::Migration),
            Box::new(m20260310_000009_create_pbv_option_table::Migration),
        ]
    }
}
