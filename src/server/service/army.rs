//! Army lists owned by users and the public army gallery.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        army::ArmyRepository, detachment::DetachmentRepository, dossier::DossierRepository,
        faction::FactionRepository,
    },
    error::AppError,
    model::army::{Army, ArmyParam, GalleryFilter, MAX_POINTS},
    util::{
        pagination::{Page, PaginationParams},
        validation,
    },
};

pub struct ArmyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArmyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an army for `user_id`.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name, points out of range, unknown faction or a
    ///   detachment from another faction
    pub async fn create(&self, user_id: i32, param: ArmyParam) -> Result<Army, AppError> {
        let param = self.validate(param).await?;

        let army = ArmyRepository::new(self.db).create(user_id, param).await?;

        tracing::info!(army_id = army.id, user_id, "Created army");

        Ok(army)
    }

    /// Gets an army visible to `viewer`: public armies or the viewer's own.
    ///
    /// Hidden armies answer 404 so their existence isn't leaked.
    pub async fn get(&self, id: i32, viewer: Option<i32>) -> Result<Army, AppError> {
        ArmyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|army| army.visible_to(viewer))
            .ok_or_else(not_found)
    }

    /// Updates an army owned by `user_id`.
    pub async fn update(&self, user_id: i32, id: i32, param: ArmyParam) -> Result<Army, AppError> {
        self.owned(user_id, id).await?;
        let param = self.validate(param).await?;

        ArmyRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes an army owned by `user_id`.
    ///
    /// Briefs written for the army survive with their army reference cleared.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.owned(user_id, id).await?;

        let txn = self.db.begin().await?;
        let detached = DossierRepository::new(&txn).clear_army(id).await?;
        ArmyRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::info!(army_id = id, user_id, detached_briefs = detached, "Deleted army");

        Ok(())
    }

    /// Gets the user's armies, newest first.
    pub async fn list_own(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<Army>, AppError> {
        Ok(ArmyRepository::new(self.db)
            .get_by_user_paginated(user_id, params)
            .await?)
    }

    pub async fn gallery(
        &self,
        filter: GalleryFilter,
        params: PaginationParams,
    ) -> Result<Page<Army>, AppError> {
        let filter = GalleryFilter {
            query: validation::optional_text(filter.query),
            ..filter
        };

        Ok(ArmyRepository::new(self.db)
            .get_public_paginated(&filter, params)
            .await?)
    }

    /// Loads an army and checks that `user_id` owns it.
    pub async fn owned(&self, user_id: i32, id: i32) -> Result<Army, AppError> {
        ArmyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|army| army.user_id == user_id)
            .ok_or_else(not_found)
    }

    async fn validate(&self, param: ArmyParam) -> Result<ArmyParam, AppError> {
        let name = validation::required_name("Army name", &param.name)?;

        if !(0..=MAX_POINTS).contains(&param.points) {
            return Err(AppError::BadRequest(format!(
                "Points must be between 0 and {}",
                MAX_POINTS
            )));
        }

        if FactionRepository::new(self.db)
            .find_by_id(param.faction_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Unknown faction {}",
                param.faction_id
            )));
        }

        if let Some(detachment_id) = param.detachment_id {
            let belongs = DetachmentRepository::new(self.db)
                .find_by_id(detachment_id)
                .await?
                .is_some_and(|d| d.faction_id == param.faction_id);

            if !belongs {
                return Err(AppError::BadRequest(
                    "Detachment does not belong to the army's faction".to_string(),
                ));
            }
        }

        Ok(ArmyParam { name, ..param })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Army not found".to_string())
}
