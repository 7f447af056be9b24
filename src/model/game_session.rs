use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{mission::MissionDto, stratagem::StratagemDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct SecondaryDto {
    pub name: String,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameSessionDto {
    pub id: i32,
    pub army_id: Option<i32>,
    pub mission_id: Option<i32>,
    pub opponent: Option<String>,
    pub mission_mode: String,
    pub status: String,
    pub battle_round: i32,
    pub command_points: i32,
    pub primary_score: i32,
    pub secondaries: Vec<SecondaryDto>,
    pub total_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedGameSessionsDto {
    pub sessions: Vec<GameSessionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateGameSessionDto {
    #[serde(default)]
    pub army_id: Option<i32>,
    #[serde(default)]
    pub mission_id: Option<i32>,
    #[serde(default)]
    pub opponent: Option<String>,
    /// `fixed` (default) or `tactical`.
    #[serde(default)]
    pub mission_mode: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateSecondariesDto {
    pub secondaries: Vec<SecondaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MissionModeDto {
    pub mode: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PrimaryScoreDto {
    pub primary: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CommandPointsDto {
    pub delta: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SessionEventDto {
    pub id: i32,
    pub kind: String,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Rules available during a session: its mission and usable stratagems.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SessionRulesDto {
    pub mission: Option<MissionDto>,
    pub stratagems: Vec<StratagemDto>,
}
