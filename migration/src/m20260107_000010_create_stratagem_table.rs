use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_detachment_table::Detachment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stratagem::Table)
                    .if_not_exists()
                    .col(pk_auto(Stratagem::Id))
                    .col(integer_null(Stratagem::DetachmentId))
                    .col(string(Stratagem::Name))
                    .col(integer(Stratagem::CpCost))
                    .col(string(Stratagem::Phase))
                    .col(text(Stratagem::Description))
                    .col(
                        timestamp_with_time_zone(Stratagem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stratagem_detachment_id")
                            .from(Stratagem::Table, Stratagem::DetachmentId)
                            .to(Detachment::Table, Detachment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stratagem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stratagem {
    Table,
    Id,
    DetachmentId,
    Name,
    CpCost,
    Phase,
    Description,
    CreatedAt,
}
