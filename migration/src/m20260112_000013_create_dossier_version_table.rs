use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_token_ledger_table::TokenLedger,
    m20260106_000008_create_dossier_table::Dossier,
};

/// Introduces dossier version history.
///
/// Existing dossier bodies move to `legacy_content` untouched; they are read
/// as version 1 until the dossier is next edited.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DossierVersion::Table)
                    .if_not_exists()
                    .col(pk_auto(DossierVersion::Id))
                    .col(integer(DossierVersion::DossierId))
                    .col(integer(DossierVersion::VersionNumber))
                    .col(text(DossierVersion::Content))
                    .col(string(DossierVersion::Source))
                    .col(integer_null(DossierVersion::LedgerEntryId))
                    .col(
                        timestamp_with_time_zone(DossierVersion::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_version_dossier_id")
                            .from(DossierVersion::Table, DossierVersion::DossierId)
                            .to(Dossier::Table, Dossier::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_version_ledger_entry_id")
                            .from(DossierVersion::Table, DossierVersion::LedgerEntryId)
                            .to(TokenLedger::Table, TokenLedger::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dossier_version_number")
                    .table(DossierVersion::Table)
                    .col(DossierVersion::DossierId)
                    .col(DossierVersion::VersionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Dossier::Table)
                    .rename_column(Dossier::Content, Dossier::LegacyContent)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Dossier::Table)
                    .add_column(integer_null(Dossier::CurrentVersionId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Dossier::Table)
                    .drop_column(Dossier::CurrentVersionId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Dossier::Table)
                    .rename_column(Dossier::LegacyContent, Dossier::Content)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DossierVersion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DossierVersion {
    Table,
    Id,
    DossierId,
    VersionNumber,
    Content,
    Source,
    LedgerEntryId,
    CreatedAt,
}
