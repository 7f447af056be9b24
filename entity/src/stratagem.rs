use sea_orm::entity::prelude::*;

/// Stratagem rule; a null `detachment_id` marks a core stratagem.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stratagem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub detachment_id: Option<i32>,
    pub name: String,
    pub cp_cost: i32,
    pub phase: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::detachment::Entity",
        from = "Column::DetachmentId",
        to = "super::detachment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Detachment,
}

impl Related<super::detachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Detachment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
