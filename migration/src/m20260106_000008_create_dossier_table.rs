use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_faction_table::Faction,
    m20260105_000003_create_detachment_table::Detachment, m20260106_000007_create_army_table::Army,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dossier::Table)
                    .if_not_exists()
                    .col(pk_auto(Dossier::Id))
                    .col(integer(Dossier::UserId))
                    .col(integer_null(Dossier::ArmyId))
                    .col(integer(Dossier::FactionId))
                    .col(integer_null(Dossier::DetachmentId))
                    .col(string(Dossier::Title))
                    .col(boolean(Dossier::IsPublic).default(false))
                    .col(text_null(Dossier::Content))
                    .col(
                        timestamp_with_time_zone(Dossier::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Dossier::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_user_id")
                            .from(Dossier::Table, Dossier::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_army_id")
                            .from(Dossier::Table, Dossier::ArmyId)
                            .to(Army::Table, Army::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_faction_id")
                            .from(Dossier::Table, Dossier::FactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_detachment_id")
                            .from(Dossier::Table, Dossier::DetachmentId)
                            .to(Detachment::Table, Detachment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dossier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dossier {
    Table,
    Id,
    UserId,
    ArmyId,
    FactionId,
    DetachmentId,
    Title,
    IsPublic,
    Content,
    LegacyContent,
    CurrentVersionId,
    CreatedAt,
    UpdatedAt,
}
