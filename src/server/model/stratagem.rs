use crate::model::stratagem::{StratagemDto, StratagemPayloadDto};

pub const MAX_CP_COST: i32 = 3;

/// Game phase in which a stratagem may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Command,
    Movement,
    Shooting,
    Charge,
    Fight,
    Any,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Movement => "movement",
            Self::Shooting => "shooting",
            Self::Charge => "charge",
            Self::Fight => "fight",
            Self::Any => "any",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "command" => Some(Self::Command),
            "movement" => Some(Self::Movement),
            "shooting" => Some(Self::Shooting),
            "charge" => Some(Self::Charge),
            "fight" => Some(Self::Fight),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stratagem {
    pub id: i32,
    pub detachment_id: Option<i32>,
    pub name: String,
    pub cp_cost: i32,
    pub phase: String,
    pub description: String,
}

impl Stratagem {
    pub fn from_entity(entity: entity::stratagem::Model) -> Self {
        Self {
            id: entity.id,
            detachment_id: entity.detachment_id,
            name: entity.name,
            cp_cost: entity.cp_cost,
            phase: entity.phase,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> StratagemDto {
        StratagemDto {
            id: self.id,
            detachment_id: self.detachment_id,
            name: self.name,
            cp_cost: self.cp_cost,
            phase: self.phase,
            description: self.description,
        }
    }

    pub fn is_core(&self) -> bool {
        self.detachment_id.is_none()
    }

    /// Whether an army using `detachment_id` may play this stratagem.
    pub fn usable_by(&self, detachment_id: Option<i32>) -> bool {
        self.is_core() || (detachment_id.is_some() && self.detachment_id == detachment_id)
    }
}

#[derive(Debug, Clone)]
pub struct StratagemParam {
    pub detachment_id: Option<i32>,
    pub name: String,
    pub cp_cost: i32,
    pub phase: Phase,
    pub description: String,
}

/// Lookup filters for the public stratagem endpoint.
#[derive(Debug, Clone, Default)]
pub struct StratagemFilter {
    pub detachment_id: Option<i32>,
    pub phase: Option<Phase>,
    pub include_core: bool,
}

impl StratagemParam {
    /// Converts and validates a payload.
    ///
    /// # Returns
    /// - `Err(String)` - Message for a 400 response when the phase is unknown
    pub fn from_dto(dto: StratagemPayloadDto) -> Result<Self, String> {
        let phase = Phase::parse(&dto.phase).ok_or_else(|| {
            format!(
                "Unknown phase '{}', expected one of command, movement, shooting, charge, fight, any",
                dto.phase
            )
        })?;

        Ok(Self {
            detachment_id: dto.detachment_id,
            name: dto.name,
            cp_cost: dto.cp_cost,
            phase,
            description: dto.description,
        })
    }
}
