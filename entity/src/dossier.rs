use sea_orm::entity::prelude::*;

/// Tactical brief generated for an army list.
///
/// `legacy_content` holds the body of dossiers written before version history
/// existed; such rows have no `dossier_version` rows until their first edit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dossier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub title: String,
    pub is_public: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub legacy_content: Option<String>,
    pub current_version_id: Option<i32>,
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
        belongs_to = "super::army::Entity",
        from = "Column::ArmyId",
        to = "super::army::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Army,
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
        on_delete = "SetNull"
    )]
    Detachment,
    #[sea_orm(has_many = "super::dossier_version::Entity")]
    DossierVersion,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::army::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Army.def()
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

impl Related<super::dossier_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DossierVersion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
