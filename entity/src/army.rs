use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "army")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub name: String,
    pub points: i32,
    #[sea_orm(column_type = "Text")]
    pub list_text: String,
    pub is_public: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
        belongs_to = "super::faction::Entity",
        from = "Column::FactionId",
        to = "super::faction::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Faction,
    #[sea_orm(
        belongs_to = "super::detachment::Entity",
        from = "Column::DetachmentId",
        to = "super::detachment::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Detachment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl Related<super::detachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Detachment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
