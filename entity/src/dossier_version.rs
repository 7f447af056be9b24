use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dossier_version")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dossier_id: i32,
    pub version_number: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub source: String,
    pub ledger_entry_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dossier::Entity",
        from = "Column::DossierId",
        to = "super::dossier::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Dossier,
    #[sea_orm(
        belongs_to = "super::token_ledger::Entity",
        from = "Column::LedgerEntryId",
        to = "super::token_ledger::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TokenLedger,
}

impl Related<super::dossier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dossier.def()
    }
}

impl Related<super::token_ledger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TokenLedger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
