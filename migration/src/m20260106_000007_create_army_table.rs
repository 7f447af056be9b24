use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_faction_table::Faction,
    m20260105_000003_create_detachment_table::Detachment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Army::Table)
                    .if_not_exists()
                    .col(pk_auto(Army::Id))
                    .col(integer(Army::UserId))
                    .col(integer(Army::FactionId))
                    .col(integer_null(Army::DetachmentId))
                    .col(string(Army::Name))
                    .col(integer(Army::Points).default(0))
                    .col(text(Army::ListText))
                    .col(boolean(Army::IsPublic).default(false))
                    .col(timestamp_with_time_zone(Army::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Army::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_army_user_id")
                            .from(Army::Table, Army::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_army_faction_id")
                            .from(Army::Table, Army::FactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_army_detachment_id")
                            .from(Army::Table, Army::DetachmentId)
                            .to(Detachment::Table, Detachment::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Army::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Army {
    Table,
    Id,
    UserId,
    FactionId,
    DetachmentId,
    Name,
    Points,
    ListText,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}
