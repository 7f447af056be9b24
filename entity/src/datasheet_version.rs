use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "datasheet_version")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub datasheet_id: i32,
    pub version_number: i32,
    pub profile: Json,
    pub source: String,
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::datasheet::Entity",
        from = "Column::DatasheetId",
        to = "super::datasheet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Datasheet,
}

impl Related<super::datasheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Datasheet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
