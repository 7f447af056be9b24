use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000011_create_game_session_table::GameSession;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(SessionEvent::Id))
                    .col(integer(SessionEvent::SessionId))
                    .col(integer(SessionEvent::UserId))
                    .col(string(SessionEvent::Kind))
                    .col(json(SessionEvent::Payload))
                    .col(
                        timestamp_with_time_zone(SessionEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_event_session_id")
                            .from(SessionEvent::Table, SessionEvent::SessionId)
                            .to(GameSession::Table, GameSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionEvent {
    Table,
    Id,
    SessionId,
    UserId,
    Kind,
    Payload,
    CreatedAt,
}
