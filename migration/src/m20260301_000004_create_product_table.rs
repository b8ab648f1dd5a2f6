use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_brand_table::Brand;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::BrandId))
                    .col(string(Product::Name))
                    .col(big_integer(Product::Price))
                    .col(big_integer(Product::Amount).default(0))
                    .col(string(Product::TitleImage).default(""))
                    .col(string(Product::DescriptionAsset).default(""))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_brand_id")
                            .from(Product::Table, Product::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    BrandId,
    Name,
    Price,
    Amount,
    TitleImage,
    DescriptionAsset,
    CreatedAt,
    UpdatedAt,
}
