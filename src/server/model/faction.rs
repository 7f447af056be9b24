//! Faction and detachment catalog models.

use crate::model::faction::{
    CreateDetachmentDto, CreateFactionDto, DetachmentDto, FactionDetailDto, FactionDto,
    UpdateDetachmentDto, UpdateFactionDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Faction {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

impl Faction {
    pub fn from_entity(entity: entity::faction::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon_url: entity.icon_url,
        }
    }

    pub fn into_dto(self) -> FactionDto {
        FactionDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
        }
    }

    pub fn into_detail_dto(self, detachments: Vec<Detachment>) -> FactionDetailDto {
        FactionDetailDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
            detachments: detachments.into_iter().map(Detachment::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detachment {
    pub id: i32,
    pub faction_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

impl Detachment {
    pub fn from_entity(entity: entity::detachment::Model) -> Self {
        Self {
            id: entity.id,
            faction_id: entity.faction_id,
            name: entity.name,
            description: entity.description,
            icon_url: entity.icon_url,
        }
    }

    pub fn into_dto(self) -> DetachmentDto {
        DetachmentDto {
            id: self.id,
            faction_id: self.faction_id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
        }
    }
}

/// Name and description shared by faction create and update.
#[derive(Debug, Clone)]
pub struct FactionParam {
    pub name: String,
    pub description: Option<String>,
}

impl FactionParam {
    pub fn from_create_dto(dto: CreateFactionDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }

    pub fn from_update_dto(dto: UpdateFactionDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetachmentParam {
    pub name: String,
    pub description: Option<String>,
}

impl DetachmentParam {
    pub fn from_create_dto(dto: CreateDetachmentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }

    pub fn from_update_dto(dto: UpdateDetachmentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
