use sea_orm::DatabaseConnection;

use crate::server::{
    data::{detachment::DetachmentRepository, stratagem::StratagemRepository},
    error::AppError,
    model::stratagem::{Stratagem, StratagemFilter, StratagemParam, MAX_CP_COST},
    util::validation,
};

pub struct StratagemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StratagemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up stratagems, cheapest first.
    pub async fn search(&self, filter: StratagemFilter) -> Result<Vec<Stratagem>, AppError> {
        Ok(StratagemRepository::new(self.db).search(&filter).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Stratagem, AppError> {
        StratagemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a stratagem. Without a detachment it becomes a core stratagem.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name, CP cost outside 0..=3 or unknown detachment
    /// - `Err(AppError::Conflict)` - Name already used in the same detachment or core set
    pub async fn create(&self, param: StratagemParam) -> Result<Stratagem, AppError> {
        let param = self.validate(param, None).await?;
        let stratagem = StratagemRepository::new(self.db).create(param).await?;

        tracing::info!(stratagem_id = stratagem.id, name = %stratagem.name, "Created stratagem");

        Ok(stratagem)
    }

    pub async fn update(&self, id: i32, param: StratagemParam) -> Result<Stratagem, AppError> {
        self.get(id).await?;
        let param = self.validate(param, Some(id)).await?;

        StratagemRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StratagemRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(stratagem_id = id, "Deleted stratagem");

        Ok(())
    }

    async fn validate(
        &self,
        param: StratagemParam,
        exclude_id: Option<i32>,
    ) -> Result<StratagemParam, AppError> {
        let name = validation::required_name("Stratagem name", &param.name)?;

        if !(0..=MAX_CP_COST).contains(&param.cp_cost) {
            return Err(AppError::BadRequest(format!(
                "CP cost must be between 0 and {}",
                MAX_CP_COST
            )));
        }

        if let Some(detachment_id) = param.detachment_id {
            if DetachmentRepository::new(self.db)
                .find_by_id(detachment_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Unknown detachment {}",
                    detachment_id
                )));
            }
        }

        if StratagemRepository::new(self.db)
            .name_taken(param.detachment_id, &name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A stratagem named '{}' already exists there",
                name
            )));
        }

        Ok(StratagemParam {
            name,
            description: param.description.trim().to_string(),
            ..param
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Stratagem not found".to_string())
}
