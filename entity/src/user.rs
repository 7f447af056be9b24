use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub name: String,
    pub admin: bool,
    pub token_balance: i64,
    pub created_at: DateTimeUtc,
    pub last_login_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::army::Entity")]
    Army,
    #[sea_orm(has_many = "super::dossier::Entity")]
    Dossier,
    #[sea_orm(has_many = "super::token_ledger::Entity")]
    TokenLedger,
    #[sea_orm(has_many = "super::token_purchase::Entity")]
    TokenPurchase,
    #[sea_orm(has_many = "super::game_session::Entity")]
    GameSession,
}

impl Related<super::army::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Army.def()
    }
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

impl Related<super::token_purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TokenPurchase.def()
    }
}

impl Related<super::game_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
