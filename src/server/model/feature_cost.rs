use chrono::{DateTime, Utc};

use crate::model::feature_cost::{CreateFeatureCostDto, FeatureCostDto, UpdateFeatureCostDto};

/// Well-known feature keys charged by the brief endpoints.
pub const BRIEF_GENERATION: &str = "brief_generation";
pub const BRIEF_REGENERATION: &str = "brief_regeneration";

/// Price of a paid feature in tokens.
///
/// Deleting a cost only stamps `deleted_at` so ledger entries referencing it stay valid.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCost {
    pub id: i32,
    pub feature_key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub cost: i64,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FeatureCost {
    pub fn from_entity(entity: entity::feature_cost::Model) -> Self {
        Self {
            id: entity.id,
            feature_key: entity.feature_key,
            display_name: entity.display_name,
            description: entity.description,
            cost: entity.cost,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> FeatureCostDto {
        FeatureCostDto {
            id: self.id,
            feature_key: self.feature_key,
            display_name: self.display_name,
            description: self.description,
            cost: self.cost,
            deleted_at: self.deleted_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeatureCostParam {
    pub feature_key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub cost: i64,
}

impl CreateFeatureCostParam {
    pub fn from_dto(dto: CreateFeatureCostDto) -> Self {
        Self {
            feature_key: dto.feature_key,
            display_name: dto.display_name,
            description: dto.description,
            cost: dto.cost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFeatureCostParam {
    pub display_name: String,
    pub description: Option<String>,
    pub cost: i64,
}

impl UpdateFeatureCostParam {
    pub fn from_dto(dto: UpdateFeatureCostDto) -> Self {
        Self {
            display_name: dto.display_name,
            description: dto.description,
            cost: dto.cost,
        }
    }
}
