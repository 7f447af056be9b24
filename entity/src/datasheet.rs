use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "datasheet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faction_id: i32,
    pub name: String,
    pub role: String,
    pub keywords: String,
    pub is_enabled: bool,
    pub legacy_profile: Option<Json>,
    pub current_version_id: Option<i32>,
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
    #[sea_orm(has_many = "super::datasheet_version::Entity")]
    DatasheetVersion,
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl Related<super::datasheet_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DatasheetVersion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
