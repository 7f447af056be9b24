use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000004_create_feature_cost_table::FeatureCost,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TokenLedger::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenLedger::Id))
                    .col(integer(TokenLedger::UserId))
                    .col(big_integer(TokenLedger::Delta))
                    .col(big_integer(TokenLedger::BalanceAfter))
                    .col(string(TokenLedger::Kind))
                    .col(integer_null(TokenLedger::FeatureCostId))
                    .col(string_null(TokenLedger::Reference))
                    .col(text_null(TokenLedger::Note))
                    .col(
                        timestamp_with_time_zone(TokenLedger::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_token_ledger_user_id")
                            .from(TokenLedger::Table, TokenLedger::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_token_ledger_feature_cost_id")
                            .from(TokenLedger::Table, TokenLedger::FeatureCostId)
                            .to(FeatureCost::Table, FeatureCost::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_token_ledger_user_created")
                    .table(TokenLedger::Table)
                    .col(TokenLedger::UserId)
                    .col(TokenLedger::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TokenLedger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TokenLedger {
    Table,
    Id,
    UserId,
    Delta,
    BalanceAfter,
    Kind,
    FeatureCostId,
    Reference,
    Note,
    CreatedAt,
}
