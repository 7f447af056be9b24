use crate::model::mission::{MissionDto, MissionPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: i32,
    pub name: String,
    pub deployment: String,
    pub primary_objective: String,
    pub rules: String,
}

impl Mission {
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            deployment: entity.deployment,
            primary_objective: entity.primary_objective,
            rules: entity.rules,
        }
    }

    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            name: self.name,
            deployment: self.deployment,
            primary_objective: self.primary_objective,
            rules: self.rules,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MissionParam {
    pub name: String,
    pub deployment: String,
    pub primary_objective: String,
    pub rules: String,
}

impl MissionParam {
    pub fn from_dto(dto: MissionPayloadDto) -> Self {
        Self {
            name: dto.name,
            deployment: dto.deployment,
            primary_objective: dto.primary_objective,
            rules: dto.rules,
        }
    }
}
