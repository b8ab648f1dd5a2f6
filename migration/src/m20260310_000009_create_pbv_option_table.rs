use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PbvOption::Table)
                    .if_not_exists()
                    .col(pk_auto(PbvOption::Id))
                    .col(integer_uniq(PbvOption::UserId))
                    .col(blob(PbvOption::Data))
                    .col(
                        timestamp_with_time_zone(PbvOption::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PbvOption::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pbv_option_user_id")
                            .from(PbvOption::Table, PbvOption::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PbvOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PbvOption {
    Table,
    Id,
    UserId,
    Data,
    CreatedAt,
    UpdatedAt,
}
