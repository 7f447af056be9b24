use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "token_ledger")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub delta: i64,
    pub balance_after: i64,
    pub kind: String,
    pub feature_cost_id: Option<i32>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::feature_cost::Entity",
        from = "Column::FeatureCostId",
        to = "super::feature_cost::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    FeatureCost,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::feature_cost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeatureCost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
