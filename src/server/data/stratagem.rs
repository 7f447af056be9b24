use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::stratagem::{Phase, Stratagem, StratagemFilter, StratagemParam};

pub struct StratagemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StratagemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Stratagem>, DbErr> {
        let entity = entity::prelude::Stratagem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Stratagem::from_entity))
    }

    /// Looks up stratagems.
    ///
    /// With a detachment, returns that detachment's stratagems plus core ones when
    /// `include_core` is set. Without a detachment, returns core stratagems only.
    pub async fn search(&self, filter: &StratagemFilter) -> Result<Vec<Stratagem>, DbErr> {
        let scope = match filter.detachment_id {
            Some(detachment_id) => {
                let mut scope = Condition::any()
                    .add(entity::stratagem::Column::DetachmentId.eq(detachment_id));
                if filter.include_core {
                    scope = scope.add(entity::stratagem::Column::DetachmentId.is_null());
                }
                scope
            }
            None => Condition::all().add(entity::stratagem::Column::DetachmentId.is_null()),
        };

        let mut select = entity::prelude::Stratagem::find().filter(scope);

        // `any` stratagems apply in every phase
        if let Some(phase) = filter.phase {
            select = select.filter(
                Condition::any()
                    .add(entity::stratagem::Column::Phase.eq(phase.as_str()))
                    .add(entity::stratagem::Column::Phase.eq(Phase::Any.as_str())),
            );
        }

        let entities = select
            .order_by_asc(entity::stratagem::Column::CpCost)
            .order_by_asc(entity::stratagem::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Stratagem::from_entity).collect())
    }

    /// Checks for a name clash within the same detachment, or among core stratagems.
    pub async fn name_taken(
        &self,
        detachment_id: Option<i32>,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let scope = match detachment_id {
            Some(id) => entity::stratagem::Column::DetachmentId.eq(id),
            None => entity::stratagem::Column::DetachmentId.is_null(),
        };

        let mut select = entity::prelude::Stratagem::find()
            .filter(scope)
            .filter(super::equals_ignore_case(entity::stratagem::Column::Name, name));

        if let Some(id) = exclude_id {
            select = select.filter(entity::stratagem::Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    pub async fn create(&self, param: StratagemParam) -> Result<Stratagem, DbErr> {
        let entity = entity::stratagem::ActiveModel {
            detachment_id: ActiveValue::Set(param.detachment_id),
            name: ActiveValue::Set(param.name),
            cp_cost: ActiveValue::Set(param.cp_cost),
            phase: ActiveValue::Set(param.phase.as_str().to_string()),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Stratagem::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: StratagemParam) -> Result<Option<Stratagem>, DbErr> {
        let Some(entity) = entity::prelude::Stratagem::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::stratagem::ActiveModel = entity.into();
        active.detachment_id = ActiveValue::Set(param.detachment_id);
        active.name = ActiveValue::Set(param.name);
        active.cp_cost = ActiveValue::Set(param.cp_cost);
        active.phase = ActiveValue::Set(param.phase.as_str().to_string());
        active.description = ActiveValue::Set(param.description);

        Ok(Some(Stratagem::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Stratagem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
