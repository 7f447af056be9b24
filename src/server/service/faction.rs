//! Faction catalog management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        army::ArmyRepository, detachment::DetachmentRepository, dossier::DossierRepository,
        faction::FactionRepository,
    },
    error::AppError,
    model::faction::{Detachment, Faction, FactionParam},
    util::validation,
};

pub struct FactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Faction>, AppError> {
        Ok(FactionRepository::new(self.db).get_all().await?)
    }

    /// Gets a faction together with its detachments.
    pub async fn get(&self, id: i32) -> Result<(Faction, Vec<Detachment>), AppError> {
        let faction = self.find(id).await?;
        let detachments = DetachmentRepository::new(self.db)
            .get_by_faction(id)
            .await?;

        Ok((faction, detachments))
    }

    /// Creates a faction.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::Conflict)` - Name already used, ignoring case
    pub async fn create(&self, param: FactionParam) -> Result<Faction, AppError> {
        let param = self.validate(param, None).await?;

        let faction = FactionRepository::new(self.db).create(param).await?;

        tracing::info!(faction_id = faction.id, name = %faction.name, "Created faction");

        Ok(faction)
    }

    /// Renames or re-describes a faction. Keeping the current name is allowed.
    pub async fn update(&self, id: i32, param: FactionParam) -> Result<Faction, AppError> {
        self.find(id).await?;
        let param = self.validate(param, Some(id)).await?;

        FactionRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a faction along with its detachments, their stratagems and its datasheets.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Armies or dossiers still reference the faction
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.find(id).await?;

        let armies = ArmyRepository::new(self.db).count_by_faction(id).await?;
        let dossiers = DossierRepository::new(self.db).count_by_faction(id).await?;
        if armies > 0 || dossiers > 0 {
            return Err(AppError::Conflict(format!(
                "Faction is still used by {} armies and {} briefs",
                armies, dossiers
            )));
        }

        FactionRepository::new(self.db).delete(id).await?;

        tracing::info!(faction_id = id, "Deleted faction");

        Ok(())
    }

    /// Sets the faction icon, or clears it with `None`.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Not an absolute http(s) URL
    pub async fn set_icon(&self, id: i32, icon_url: Option<&str>) -> Result<Faction, AppError> {
        let icon_url = icon_url.map(validation::icon_url).transpose()?;

        FactionRepository::new(self.db)
            .set_icon(id, icon_url)
            .await?
            .ok_or_else(not_found)
    }

    async fn find(&self, id: i32) -> Result<Faction, AppError> {
        FactionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    async fn validate(
        &self,
        param: FactionParam,
        exclude_id: Option<i32>,
    ) -> Result<FactionParam, AppError> {
        let name = validation::required_name("Faction name", &param.name)?;

        if FactionRepository::new(self.db)
            .name_taken(&name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A faction named '{}' already exists",
                name
            )));
        }

        Ok(FactionParam {
            name,
            description: validation::optional_text(param.description),
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Faction not found".to_string())
}
