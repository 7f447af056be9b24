use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260106_000007_create_army_table::Army,
    m20260107_000009_create_mission_table::Mission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSession::Table)
                    .if_not_exists()
                    .col(pk_auto(GameSession::Id))
                    .col(integer(GameSession::UserId))
                    .col(integer_null(GameSession::ArmyId))
                    .col(integer_null(GameSession::MissionId))
                    .col(string_null(GameSession::Opponent))
                    .col(string(GameSession::MissionMode).default("fixed"))
                    .col(string(GameSession::Status).default("active"))
                    .col(integer(GameSession::BattleRound).default(1))
                    .col(integer(GameSession::CommandPoints).default(0))
                    .col(integer(GameSession::PrimaryScore).default(0))
                    .col(json(GameSession::Secondaries))
                    .col(
                        timestamp_with_time_zone(GameSession::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(GameSession::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(GameSession::EndedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_session_user_id")
                            .from(GameSession::Table, GameSession::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_session_army_id")
                            .from(GameSession::Table, GameSession::ArmyId)
                            .to(Army::Table, Army::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_session_mission_id")
                            .from(GameSession::Table, GameSession::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameSession {
    Table,
    Id,
    UserId,
    ArmyId,
    MissionId,
    Opponent,
    MissionMode,
    Status,
    BattleRound,
    CommandPoints,
    PrimaryScore,
    Secondaries,
    CreatedAt,
    UpdatedAt,
    EndedAt,
}
