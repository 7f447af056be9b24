use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_faction_table::Faction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Detachment::Table)
                    .if_not_exists()
                    .col(pk_auto(Detachment::Id))
                    .col(integer(Detachment::FactionId))
                    .col(string(Detachment::Name))
                    .col(text_null(Detachment::Description))
                    .col(string_null(Detachment::IconUrl))
                    .col(
                        timestamp_with_time_zone(Detachment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Detachment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detachment_faction_id")
                            .from(Detachment::Table, Detachment::FactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_detachment_faction_name")
                    .table(Detachment::Table)
                    .col(Detachment::FactionId)
                    .col(Detachment::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Detachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Detachment {
    Table,
    Id,
    FactionId,
    Name,
    Description,
    IconUrl,
    CreatedAt,
    UpdatedAt,
}
