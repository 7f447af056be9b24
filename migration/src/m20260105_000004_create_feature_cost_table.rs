use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeatureCost::Table)
                    .if_not_exists()
                    .col(pk_auto(FeatureCost::Id))
                    .col(string(FeatureCost::FeatureKey))
                    .col(string(FeatureCost::DisplayName))
                    .col(text_null(FeatureCost::Description))
                    .col(big_integer(FeatureCost::Cost))
                    .col(timestamp_with_time_zone_null(FeatureCost::DeletedAt))
                    .col(
                        timestamp_with_time_zone(FeatureCost::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FeatureCost::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: retired rows keep their key so ledger history stays readable.
        manager
            .create_index(
                Index::create()
                    .name("idx_feature_cost_feature_key")
                    .table(FeatureCost::Table)
                    .col(FeatureCost::FeatureKey)
                    .to_owned(),
            )
            .await?;

        // One active price per key.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_feature_cost_active_key \
                 ON feature_cost (feature_key) WHERE deleted_at IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureCost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeatureCost {
    Table,
    Id,
    FeatureKey,
    DisplayName,
    Description,
    Cost,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
