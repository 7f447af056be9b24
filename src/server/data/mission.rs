use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::mission::{Mission, MissionParam};

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Mission>, DbErr> {
        let entity = entity::prelude::Mission::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Mission::from_entity))
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Mission::find()
            .filter(super::equals_ignore_case(entity::mission::Column::Name, name));

        if let Some(id) = exclude_id {
            select = select.filter(entity::mission::Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    pub async fn create(&self, param: MissionParam) -> Result<Mission, DbErr> {
        let entity = entity::mission::ActiveModel {
            name: ActiveValue::Set(param.name),
            deployment: ActiveValue::Set(param.deployment),
            primary_objective: ActiveValue::Set(param.primary_objective),
            rules: ActiveValue::Set(param.rules),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Mission::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: MissionParam) -> Result<Option<Mission>, DbErr> {
        let Some(entity) = entity::prelude::Mission::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::mission::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.deployment = ActiveValue::Set(param.deployment);
        active.primary_objective = ActiveValue::Set(param.primary_objective);
        active.rules = ActiveValue::Set(param.rules);

        Ok(Some(Mission::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Mission::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
