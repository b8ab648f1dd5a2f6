use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductStatistics::Table)
                    .if_not_exists()
                    .col(integer(ProductStatistics::ProductId).primary_key())
                    .col(big_integer(ProductStatistics::ReviewCount).default(0))
                    .col(big_integer(ProductStatistics::SumReviewScore).default(0))
                    .col(big_integer(ProductStatistics::SoldQuantity).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_statistics_product_id")
                            .from(ProductStatistics::Table, ProductStatistics::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductStatistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductStatistics {
    Table,
    ProductId,
    ReviewCount,
    SumReviewScore,
    SoldQuantity,
}
