use chrono::{DateTime, Utc};

use crate::{
    model::army::{ArmyDto, CreateArmyDto, PaginatedArmiesDto, UpdateArmyDto},
    server::util::pagination::Page,
};

/// Largest points value accepted for an army list.
pub const MAX_POINTS: i32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Army {
    pub id: i32,
    pub user_id: i32,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub name: String,
    pub points: i32,
    pub list_text: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Army {
    pub fn from_entity(entity: entity::army::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            faction_id: entity.faction_id,
            detachment_id: entity.detachment_id,
            name: entity.name,
            points: entity.points,
            list_text: entity.list_text,
            is_public: entity.is_public,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArmyDto {
        ArmyDto {
            id: self.id,
            user_id: self.user_id,
            faction_id: self.faction_id,
            detachment_id: self.detachment_id,
            name: self.name,
            points: self.points,
            list_text: self.list_text,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn visible_to(&self, user_id: Option<i32>) -> bool {
        self.is_public || user_id == Some(self.user_id)
    }
}

pub fn armies_page_into_dto(page: Page<Army>) -> PaginatedArmiesDto {
    PaginatedArmiesDto {
        armies: page.items.into_iter().map(Army::into_dto).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }
}

/// Editable army fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct ArmyParam {
    pub name: String,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub points: i32,
    pub list_text: String,
    pub is_public: bool,
}

impl ArmyParam {
    pub fn from_create_dto(dto: CreateArmyDto) -> Self {
        Self {
            name: dto.name,
            faction_id: dto.faction_id,
            detachment_id: dto.detachment_id,
            points: dto.points,
            list_text: dto.list_text,
            is_public: dto.is_public,
        }
    }

    pub fn from_update_dto(dto: UpdateArmyDto) -> Self {
        Self {
            name: dto.name,
            faction_id: dto.faction_id,
            detachment_id: dto.detachment_id,
            points: dto.points,
            list_text: dto.list_text,
            is_public: dto.is_public,
        }
    }
}

/// Filters for the public galleries.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    pub faction_id: Option<i32>,
    pub detachment_id: Option<i32>,
    /// Case-insensitive substring of the name or title.
    pub query: Option<String>,
}
