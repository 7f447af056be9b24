//! Datasheet catalog with versioned unit profiles.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::{datasheet::DatasheetRepository, faction::FactionRepository, version},
    error::AppError,
    model::{
        datasheet::{CreateDatasheetParam, Datasheet, VersionedDatasheet},
        version::{NewVersion, VersionSource, Versioned},
    },
    util::validation,
};

pub struct DatasheetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatasheetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists datasheets with their current profiles.
    ///
    /// # Arguments
    /// - `include_disabled` - Admin listing; public callers only see enabled sheets
    pub async fn list(
        &self,
        faction_id: Option<i32>,
        include_disabled: bool,
    ) -> Result<Vec<VersionedDatasheet>, AppError> {
        let repo = DatasheetRepository::new(self.db);
        let datasheets = repo.get_all(faction_id, !include_disabled).await?;

        let mut result = Vec::with_capacity(datasheets.len());
        for datasheet in datasheets {
            let history = datasheet.history(repo.get_versions(datasheet.id).await?);
            result.push(VersionedDatasheet { datasheet, history });
        }

        Ok(result)
    }

    /// Gets a datasheet with its history. Disabled sheets are hidden unless requested.
    pub async fn get(&self, id: i32, include_disabled: bool) -> Result<VersionedDatasheet, AppError> {
        let repo = DatasheetRepository::new(self.db);
        let datasheet = repo
            .find_by_id(id)
            .await?
            .filter(|d| include_disabled || d.is_enabled)
            .ok_or_else(not_found)?;
        let history = datasheet.history(repo.get_versions(id).await?);

        Ok(VersionedDatasheet { datasheet, history })
    }

    /// Creates a datasheet and stores its profile as version 1.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name or role, or a profile that isn't an object
    /// - `Err(AppError::NotFound)` - Unknown faction
    /// - `Err(AppError::Conflict)` - Faction already has a datasheet with that name
    pub async fn create(&self, param: CreateDatasheetParam) -> Result<VersionedDatasheet, AppError> {
        let name = validation::required_name("Datasheet name", &param.name)?;
        let role = validation::required_name("Role", &param.role)?;
        check_profile(&param.profile)?;

        if FactionRepository::new(self.db)
            .find_by_id(param.faction_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Faction not found".to_string()));
        }

        if DatasheetRepository::new(self.db)
            .name_taken(param.faction_id, &name)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "This faction already has a datasheet named '{}'",
                name
            )));
        }

        let txn = self.db.begin().await?;
        let datasheet = DatasheetRepository::new(&txn)
            .create(&CreateDatasheetParam {
                name,
                role,
                ..param.clone()
            })
            .await?;
        let versioned = append_version(
            &txn,
            &datasheet,
            NewVersion {
                body: param.profile,
                source: VersionSource::Admin,
                meta: Some("Initial profile".to_string()),
            },
        )
        .await?;
        txn.commit().await?;

        tracing::info!(datasheet_id = datasheet.id, "Created datasheet");

        Ok(versioned)
    }

    /// Appends a new profile version and makes it current.
    pub async fn update_profile(
        &self,
        id: i32,
        profile: Value,
        note: Option<String>,
    ) -> Result<VersionedDatasheet, AppError> {
        check_profile(&profile)?;

        let datasheet = DatasheetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        let txn = self.db.begin().await?;
        let versioned = append_version(
            &txn,
            &datasheet,
            NewVersion {
                body: profile,
                source: VersionSource::Admin,
                meta: validation::optional_text(note),
            },
        )
        .await?;
        txn.commit().await?;

        tracing::info!(
            datasheet_id = id,
            version = versioned.history.current_number(),
            "Updated datasheet profile"
        );

        Ok(versioned)
    }

    /// Points the datasheet at an existing version without creating one.
    pub async fn set_current(&self, id: i32, version: i32) -> Result<VersionedDatasheet, AppError> {
        let current = self.get(id, true).await?;

        let pointer = current
            .history
            .pointer_for(version)
            .ok_or_else(|| AppError::NotFound(format!("Version {} not found", version)))?;

        let Some(version_id) = pointer else {
            return Ok(current);
        };

        let datasheet = DatasheetRepository::new(self.db)
            .set_current_version(id, Some(version_id))
            .await?
            .ok_or_else(not_found)?;
        let history = datasheet.history(current.history.into_versions());

        Ok(VersionedDatasheet { datasheet, history })
    }

    pub async fn set_enabled(&self, id: i32, enabled: bool) -> Result<VersionedDatasheet, AppError> {
        let repo = DatasheetRepository::new(self.db);
        let datasheet = repo
            .set_enabled(id, enabled)
            .await?
            .ok_or_else(not_found)?;
        let history = datasheet.history(repo.get_versions(id).await?);

        tracing::info!(datasheet_id = id, enabled, "Changed datasheet availability");

        Ok(VersionedDatasheet { datasheet, history })
    }
}

/// Appends a profile version and makes it current.
async fn append_version<C: ConnectionTrait>(
    db: &C,
    datasheet: &Datasheet,
    next: NewVersion<Value, Option<String>>,
) -> Result<VersionedDatasheet, AppError> {
    let (datasheet, history) = version::append(&DatasheetRepository::new(db), datasheet, next)
        .await?
        .ok_or_else(not_found)?;

    Ok(VersionedDatasheet { datasheet, history })
}

fn check_profile(profile: &Value) -> Result<(), AppError> {
    if !profile.is_object() {
        return Err(AppError::BadRequest(
            "Profile must be a JSON object".to_string(),
        ));
    }
    Ok(())
}

fn not_found() -> AppError {
    AppError::NotFound("Datasheet not found".to_string())
}
