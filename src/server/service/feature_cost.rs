//! Admin management of feature prices.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::feature_cost::FeatureCostRepository,
    error::AppError,
    model::feature_cost::{CreateFeatureCostParam, FeatureCost, UpdateFeatureCostParam},
    util::validation,
};

pub struct FeatureCostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureCostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists costs ordered by key. Soft-deleted rows are only included on request.
    pub async fn list(&self, include_deleted: bool) -> Result<Vec<FeatureCost>, AppError> {
        Ok(FeatureCostRepository::new(self.db)
            .get_all(include_deleted)
            .await?)
    }

    /// Creates a cost for a feature key.
    ///
    /// A key whose previous cost was soft-deleted can be priced again; the old row stays
    /// for the ledger entries that reference it.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Malformed key, blank name or negative cost
    /// - `Err(AppError::Conflict)` - Key already has an active cost
    pub async fn create(&self, param: CreateFeatureCostParam) -> Result<FeatureCost, AppError> {
        let feature_key = validation::feature_key(&param.feature_key)?;
        let display_name = validation::required_name("Display name", &param.display_name)?;
        check_cost(param.cost)?;

        let repo = FeatureCostRepository::new(self.db);

        if repo.find_active_by_key(&feature_key).await?.is_some() {
            return Err(already_priced(&feature_key));
        }

        let cost = repo
            .create(CreateFeatureCostParam {
                feature_key: feature_key.clone(),
                display_name,
                description: validation::optional_text(param.description),
                cost: param.cost,
            })
            .await
            .map_err(|e| match e.sql_err() {
                // Lost a race with a concurrent create of the same key.
                Some(SqlErr::UniqueConstraintViolation(_)) => already_priced(&feature_key),
                _ => AppError::from(e),
            })?;

        tracing::info!(feature = %cost.feature_key, cost = cost.cost, "Created feature cost");

        Ok(cost)
    }

    /// Updates name, description and price of an active cost.
    ///
    /// Past ledger entries keep the delta they recorded.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFeatureCostParam,
    ) -> Result<FeatureCost, AppError> {
        let display_name = validation::required_name("Display name", &param.display_name)?;
        check_cost(param.cost)?;

        let cost = FeatureCostRepository::new(self.db)
            .update(
                id,
                UpdateFeatureCostParam {
                    display_name,
                    description: validation::optional_text(param.description),
                    cost: param.cost,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Feature cost not found".to_string()))?;

        tracing::info!(feature = %cost.feature_key, cost = cost.cost, "Updated feature cost");

        Ok(cost)
    }

    /// Soft deletes an active cost.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FeatureCostRepository::new(self.db).soft_delete(id).await? {
            return Err(AppError::NotFound("Feature cost not found".to_string()));
        }

        tracing::info!(feature_cost_id = id, "Retired feature cost");

        Ok(())
    }
}

fn already_priced(feature_key: &str) -> AppError {
    AppError::Conflict(format!("Feature '{}' already has a cost", feature_key))
}

fn check_cost(cost: i64) -> Result<(), AppError> {
    if cost < 0 {
        return Err(AppError::BadRequest(
            "Cost must not be negative".to_string(),
        ));
    }
    Ok(())
}
