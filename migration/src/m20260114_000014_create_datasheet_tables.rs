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
                    .table(Datasheet::Table)
                    .if_not_exists()
                    .col(pk_auto(Datasheet::Id))
                    .col(integer(Datasheet::FactionId))
                    .col(string(Datasheet::Name))
                    .col(string(Datasheet::Role))
                    .col(string(Datasheet::Keywords).default(""))
                    .col(boolean(Datasheet::IsEnabled).default(true))
                    .col(json_null(Datasheet::LegacyProfile))
                    .col(integer_null(Datasheet::CurrentVersionId))
                    .col(
                        timestamp_with_time_zone(Datasheet::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Datasheet::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_datasheet_faction_id")
                            .from(Datasheet::Table, Datasheet::FactionId)
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
                    .name("idx_datasheet_faction_name")
                    .table(Datasheet::Table)
                    .col(Datasheet::FactionId)
                    .col(Datasheet::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DatasheetVersion::Table)
                    .if_not_exists()
                    .col(pk_auto(DatasheetVersion::Id))
                    .col(integer(DatasheetVersion::DatasheetId))
                    .col(integer(DatasheetVersion::VersionNumber))
                    .col(json(DatasheetVersion::Profile))
                    .col(string(DatasheetVersion::Source))
                    .col(text_null(DatasheetVersion::Note))
                    .col(
                        timestamp_with_time_zone(DatasheetVersion::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_datasheet_version_datasheet_id")
                            .from(DatasheetVersion::Table, DatasheetVersion::DatasheetId)
                            .to(Datasheet::Table, Datasheet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_datasheet_version_number")
                    .table(DatasheetVersion::Table)
                    .col(DatasheetVersion::DatasheetId)
                    .col(DatasheetVersion::VersionNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DatasheetVersion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Datasheet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Datasheet {
    Table,
    Id,
    FactionId,
    Name,
    Role,
    Keywords,
    IsEnabled,
    LegacyProfile,
    CurrentVersionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum DatasheetVersion {
    Table,
    Id,
    DatasheetId,
    VersionNumber,
    Profile,
    Source,
    Note,
    CreatedAt,
}
