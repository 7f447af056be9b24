//! Briefs (dossiers): generation, versioned edits and the public gallery.
//!
//! Paid operations follow the same order: check affordability, call the generator
//! outside any transaction, then create rows, debit and append the version in one
//! transaction. A failed generation therefore never charges, and a failed debit never
//! leaves a version behind.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        army::ArmyRepository, detachment::DetachmentRepository, dossier::DossierRepository,
        faction::FactionRepository, version,
    },
    error::AppError,
    model::{
        army::{Army, GalleryFilter},
        dossier::{Brief, CreateDossierParam, Dossier, MAX_TITLE_LENGTH},
        feature_cost::{BRIEF_GENERATION, BRIEF_REGENERATION},
        version::{NewVersion, Snapshot, VersionSource, Versioned},
    },
    service::{
        generator::{BriefGenerator, BriefRequest},
        ledger::Ledger,
    },
    util::{
        pagination::{Page, PaginationParams},
        validation,
    },
};

pub struct DossierService<'a> {
    db: &'a DatabaseConnection,
    generator: &'a dyn BriefGenerator,
}

impl<'a> DossierService<'a> {
    pub fn new(db: &'a DatabaseConnection, generator: &'a dyn BriefGenerator) -> Self {
        Self { db, generator }
    }

    /// Generates a brief for one of the user's armies and charges `brief_generation`.
    ///
    /// # Arguments
    /// - `title` - Defaults to "<army name> brief"
    ///
    /// # Returns
    /// - `Ok(Brief)` - Dossier with generated version 1 linked to the debit
    /// - `Err(AppError::NotFound)` - Army missing or owned by someone else
    /// - `Err(AppError::LedgerErr)` - Unknown cost or insufficient balance, nothing generated
    /// - `Err(AppError::GenerationFailed)` - Generator failed, nothing charged
    pub async fn create(
        &self,
        user_id: i32,
        army_id: i32,
        title: Option<String>,
        is_public: bool,
    ) -> Result<Brief, AppError> {
        let army = ArmyRepository::new(self.db)
            .find_by_id(army_id)
            .await?
            .filter(|army| army.user_id == user_id)
            .ok_or_else(|| AppError::NotFound("Army not found".to_string()))?;

        let title = match validation::optional_text(title) {
            Some(title) => check_title(title)?,
            None => format!("{} brief", army.name),
        };

        Ledger::new(self.db)
            .ensure_affordable(user_id, BRIEF_GENERATION)
            .await?;

        let content = self.generator.generate(&self.request_for(&army).await?).await?;

        let txn = self.db.begin().await?;

        let dossier = DossierRepository::new(&txn)
            .create(CreateDossierParam {
                user_id,
                army_id: army.id,
                faction_id: army.faction_id,
                detachment_id: army.detachment_id,
                title,
                is_public,
            })
            .await?;

        let entry = Ledger::new(&txn)
            .debit(user_id, BRIEF_GENERATION, Some(reference(dossier.id)))
            .await?;

        let brief = append_version(
            &txn,
            &dossier,
            NewVersion {
                body: content,
                source: VersionSource::Generated,
                meta: Some(entry.id),
            },
        )
        .await?;

        txn.commit().await?;

        tracing::info!(dossier_id = dossier.id, user_id, army_id, "Generated brief");

        Ok(brief)
    }

    /// Generates a new version of an existing brief, charged as `brief_regeneration`.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - The brief's army was deleted
    pub async fn regenerate(&self, user_id: i32, id: i32) -> Result<Brief, AppError> {
        let dossier = self.owned(user_id, id).await?;

        let army = match dossier.army_id {
            Some(army_id) => ArmyRepository::new(self.db).find_by_id(army_id).await?,
            None => None,
        }
        .ok_or_else(|| {
            AppError::Conflict("The army this brief was written for no longer exists".to_string())
        })?;

        Ledger::new(self.db)
            .ensure_affordable(user_id, BRIEF_REGENERATION)
            .await?;

        let content = self.generator.generate(&self.request_for(&army).await?).await?;

        let txn = self.db.begin().await?;

        let entry = Ledger::new(&txn)
            .debit(user_id, BRIEF_REGENERATION, Some(reference(dossier.id)))
            .await?;

        let brief = append_version(
            &txn,
            &dossier,
            NewVersion {
                body: content,
                source: VersionSource::Generated,
                meta: Some(entry.id),
            },
        )
        .await?;

        txn.commit().await?;

        tracing::info!(dossier_id = id, user_id, "Regenerated brief");

        Ok(brief)
    }

    /// Appends a free `edited` version with the owner's content.
    pub async fn edit(&self, user_id: i32, id: i32, content: String) -> Result<Brief, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Brief content must not be empty".to_string(),
            ));
        }

        let dossier = self.owned(user_id, id).await?;

        let txn = self.db.begin().await?;
        let brief = append_version(
            &txn,
            &dossier,
            NewVersion {
                body: content,
                source: VersionSource::Edited,
                meta: None,
            },
        )
        .await?;
        txn.commit().await?;

        Ok(brief)
    }

    /// Makes an existing version current. No version is created or copied.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No version with that number
    pub async fn set_current(&self, user_id: i32, id: i32, version: i32) -> Result<Brief, AppError> {
        let dossier = self.owned(user_id, id).await?;
        let repo = DossierRepository::new(self.db);
        let history = dossier.history(repo.get_versions(id).await?);

        let pointer = history
            .pointer_for(version)
            .ok_or_else(|| AppError::NotFound(format!("Version {} not found", version)))?;

        let Some(version_id) = pointer else {
            tracing::debug!(dossier_id = id, "Legacy version is already current");
            return Ok(Brief { dossier, history });
        };

        let dossier = repo
            .set_current_version(id, Some(version_id))
            .await?
            .ok_or_else(not_found)?;
        let history = dossier.history(history.into_versions());

        Ok(Brief { dossier, history })
    }

    pub async fn set_visibility(
        &self,
        user_id: i32,
        id: i32,
        is_public: bool,
    ) -> Result<Brief, AppError> {
        self.owned(user_id, id).await?;

        let repo = DossierRepository::new(self.db);
        let dossier = repo
            .set_visibility(id, is_public)
            .await?
            .ok_or_else(not_found)?;
        let history = dossier.history(repo.get_versions(id).await?);

        Ok(Brief { dossier, history })
    }

    /// Gets a brief visible to `viewer` with its full history.
    pub async fn get(&self, id: i32, viewer: Option<i32>) -> Result<Brief, AppError> {
        let repo = DossierRepository::new(self.db);
        let dossier = repo
            .find_by_id(id)
            .await?
            .filter(|d| d.visible_to(viewer))
            .ok_or_else(not_found)?;
        let history = dossier.history(repo.get_versions(id).await?);

        Ok(Brief { dossier, history })
    }

    /// Gets one version of a visible brief and whether it is current.
    pub async fn version(
        &self,
        id: i32,
        viewer: Option<i32>,
        number: i32,
    ) -> Result<(Snapshot<String>, bool), AppError> {
        let brief = self.get(id, viewer).await?;
        let is_current = brief.history.current_number() == Some(number);

        brief
            .history
            .into_versions()
            .into_iter()
            .find(|v| v.number == number)
            .map(|v| (v, is_current))
            .ok_or_else(|| AppError::NotFound(format!("Version {} not found", number)))
    }

    /// Deletes a brief and its versions. Ledger entries keep their `dossier:<id>` reference.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.owned(user_id, id).await?;
        DossierRepository::new(self.db).delete(id).await?;

        tracing::info!(dossier_id = id, user_id, "Deleted brief");

        Ok(())
    }

    pub async fn list_own(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<Dossier>, AppError> {
        Ok(DossierRepository::new(self.db)
            .get_by_user_paginated(user_id, params)
            .await?)
    }

    pub async fn gallery(
        &self,
        filter: GalleryFilter,
        params: PaginationParams,
    ) -> Result<Page<Dossier>, AppError> {
        let filter = GalleryFilter {
            query: validation::optional_text(filter.query),
            ..filter
        };

        Ok(DossierRepository::new(self.db)
            .get_public_paginated(&filter, params)
            .await?)
    }

    async fn owned(&self, user_id: i32, id: i32) -> Result<Dossier, AppError> {
        DossierRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|d| d.user_id == user_id)
            .ok_or_else(not_found)
    }

    async fn request_for(&self, army: &Army) -> Result<BriefRequest, AppError> {
        let faction = FactionRepository::new(self.db)
            .find_by_id(army.faction_id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Army {} has no faction", army.id)))?;

        let detachment = match army.detachment_id {
            Some(id) => DetachmentRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(|d| d.name),
            None => None,
        };

        Ok(BriefRequest {
            army_name: army.name.clone(),
            faction: faction.name,
            detachment,
            points: army.points,
            list_text: army.list_text.clone(),
        })
    }
}

/// Appends a version to the dossier's history and makes it current.
async fn append_version<C: ConnectionTrait>(
    db: &C,
    dossier: &Dossier,
    next: NewVersion<String, Option<i32>>,
) -> Result<Brief, AppError> {
    let (dossier, history) = version::append(&DossierRepository::new(db), dossier, next)
        .await?
        .ok_or_else(not_found)?;

    Ok(Brief { dossier, history })
}

fn check_title(title: String) -> Result<String, AppError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(title)
}

fn reference(dossier_id: i32) -> String {
    format!("dossier:{}", dossier_id)
}

fn not_found() -> AppError {
    AppError::NotFound("Brief not found".to_string())
}
