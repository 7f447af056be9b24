use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "detachment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faction_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faction::Entity",
        from = "Column::FactionId",
        to = "super::faction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Faction,
    #[sea_orm(has_many = "super::stratagem::Entity")]
    Stratagem,
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl Related<super::stratagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stratagem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
