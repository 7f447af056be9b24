use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game_session::GameSessionRepository, mission::MissionRepository},
    error::AppError,
    model::mission::{Mission, MissionParam},
    util::validation,
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Mission>, AppError> {
        Ok(MissionRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Mission, AppError> {
        MissionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, param: MissionParam) -> Result<Mission, AppError> {
        let param = self.validate(param, None).await?;
        let mission = MissionRepository::new(self.db).create(param).await?;

        tracing::info!(mission_id = mission.id, name = %mission.name, "Created mission");

        Ok(mission)
    }

    pub async fn update(&self, id: i32, param: MissionParam) -> Result<Mission, AppError> {
        self.get(id).await?;
        let param = self.validate(param, Some(id)).await?;

        MissionRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a mission no game session refers to.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;

        let sessions = GameSessionRepository::new(self.db)
            .count_by_mission(id)
            .await?;
        if sessions > 0 {
            return Err(AppError::Conflict(format!(
                "Mission is used by {} game sessions",
                sessions
            )));
        }

        MissionRepository::new(self.db).delete(id).await?;

        tracing::info!(mission_id = id, "Deleted mission");

        Ok(())
    }

    async fn validate(
        &self,
        param: MissionParam,
        exclude_id: Option<i32>,
    ) -> Result<MissionParam, AppError> {
        let name = validation::required_name("Mission name", &param.name)?;
        let deployment = validation::required_name("Deployment", &param.deployment)?;
        let primary_objective =
            validation::required_name("Primary objective", &param.primary_objective)?;

        if MissionRepository::new(self.db)
            .name_taken(&name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A mission named '{}' already exists",
                name
            )));
        }

        Ok(MissionParam {
            name,
            deployment,
            primary_objective,
            rules: param.rules.trim().to_string(),
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Mission not found".to_string())
}
