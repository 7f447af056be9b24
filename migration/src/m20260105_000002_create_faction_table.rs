use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faction::Table)
                    .if_not_exists()
                    .col(pk_auto(Faction::Id))
                    .col(string_uniq(Faction::Name))
                    .col(text_null(Faction::Description))
                    .col(string_null(Faction::IconUrl))
                    .col(timestamp_with_time_zone(Faction::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Faction::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faction {
    Table,
    Id,
    Name,
    Description,
    IconUrl,
    CreatedAt,
    UpdatedAt,
}
