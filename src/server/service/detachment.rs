//! Detachments within a faction.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{army::ArmyRepository, detachment::DetachmentRepository, faction::FactionRepository},
    error::AppError,
    model::faction::{Detachment, DetachmentParam},
    util::validation,
};

pub struct DetachmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DetachmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a faction's detachments by name.
    pub async fn list(&self, faction_id: i32) -> Result<Vec<Detachment>, AppError> {
        if FactionRepository::new(self.db)
            .find_by_id(faction_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Faction not found".to_string()));
        }

        Ok(DetachmentRepository::new(self.db)
            .get_by_faction(faction_id)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Detachment, AppError> {
        DetachmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a detachment under a faction.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown faction
    /// - `Err(AppError::Conflict)` - Faction already has a detachment with that name
    pub async fn create(
        &self,
        faction_id: i32,
        param: DetachmentParam,
    ) -> Result<Detachment, AppError> {
        if FactionRepository::new(self.db)
            .find_by_id(faction_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Faction not found".to_string()));
        }

        let param = self.validate(faction_id, param, None).await?;
        let detachment = DetachmentRepository::new(self.db)
            .create(faction_id, param)
            .await?;

        tracing::info!(
            detachment_id = detachment.id,
            faction_id,
            name = %detachment.name,
            "Created detachment"
        );

        Ok(detachment)
    }

    pub async fn update(&self, id: i32, param: DetachmentParam) -> Result<Detachment, AppError> {
        let existing = self.get(id).await?;
        let param = self.validate(existing.faction_id, param, Some(id)).await?;

        DetachmentRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a detachment and its stratagems.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Armies still use the detachment
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;

        let armies = ArmyRepository::new(self.db).count_by_detachment(id).await?;
        if armies > 0 {
            return Err(AppError::Conflict(format!(
                "Detachment is still used by {} armies",
                armies
            )));
        }

        DetachmentRepository::new(self.db).delete(id).await?;

        tracing::info!(detachment_id = id, "Deleted detachment");

        Ok(())
    }

    pub async fn set_icon(&self, id: i32, icon_url: Option<&str>) -> Result<Detachment, AppError> {
        let icon_url = icon_url.map(validation::icon_url).transpose()?;

        DetachmentRepository::new(self.db)
            .set_icon(id, icon_url)
            .await?
            .ok_or_else(not_found)
    }

    async fn validate(
        &self,
        faction_id: i32,
        param: DetachmentParam,
        exclude_id: Option<i32>,
    ) -> Result<DetachmentParam, AppError> {
        let name = validation::required_name("Detachment name", &param.name)?;

        if DetachmentRepository::new(self.db)
            .name_taken(faction_id, &name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "This faction already has a detachment named '{}'",
                name
            )));
        }

        Ok(DetachmentParam {
            name,
            description: validation::optional_text(param.description),
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Detachment not found".to_string())
}
