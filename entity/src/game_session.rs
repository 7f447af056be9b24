use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub mission_id: Option<i32>,
    pub opponent: Option<String>,
    pub mission_mode: String,
    pub status: String,
    pub battle_round: i32,
    pub command_points: i32,
    pub primary_score: i32,
    pub secondaries: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
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
        belongs_to = "super::mission::Entity",
        from = "Column::MissionId",
        to = "super::mission::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Mission,
    #[sea_orm(has_many = "super::session_event::Entity")]
    SessionEvent,
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

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::session_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
