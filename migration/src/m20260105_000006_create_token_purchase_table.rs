use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TokenPurchase::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenPurchase::Id))
                    .col(integer(TokenPurchase::UserId))
                    .col(string(TokenPurchase::PackageKey))
                    .col(big_integer(TokenPurchase::Tokens))
                    .col(big_integer(TokenPurchase::PriceCents))
                    .col(string(TokenPurchase::Status).default("pending"))
                    .col(integer_null(TokenPurchase::LedgerEntryId))
                    .col(
                        timestamp_with_time_zone(TokenPurchase::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(TokenPurchase::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_token_purchase_user_id")
                            .from(TokenPurchase::Table, TokenPurchase::UserId)
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
            .drop_table(Table::drop().table(TokenPurchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TokenPurchase {
    Table,
    Id,
    UserId,
    PackageKey,
    Tokens,
    PriceCents,
    Status,
    LedgerEntryId,
    CreatedAt,
    ResolvedAt,
}
