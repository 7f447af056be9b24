use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detachment::Entity")]
    Detachment,
    #[sea_orm(has_many = "super::datasheet::Entity")]
    Datasheet,
    #[sea_orm(has_many = "super::army::Entity")]
    Army,
}

impl Related<super::detachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Detachment.def()
    }
}

impl Related<super::datasheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Datasheet.def()
    }
}

impl Related<super::army::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Army.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
