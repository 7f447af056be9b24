use sea_orm::entity::prelude::*;

/// Price of a paid feature in tokens.
///
/// Rows are never hard-deleted: `deleted_at` marks a retired price so ledger
/// entries referencing it stay valid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feature_cost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub feature_key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub cost: i64,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::token_ledger::Entity")]
    TokenLedger,
}

impl Related<super::token_ledger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TokenLedger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
