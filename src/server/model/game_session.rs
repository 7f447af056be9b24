//! Game session state and the rules that constrain its mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::game_session::{
        CreateGameSessionDto, GameSessionDto, PaginatedGameSessionsDto, SecondaryDto,
        SessionEventDto,
    },
    server::{error::internal::InternalError, util::pagination::Page},
};

pub const MAX_BATTLE_ROUND: i32 = 5;
pub const MAX_PRIMARY_SCORE: i32 = 50;
pub const MAX_SECONDARY_POINTS: i32 = 20;
pub const MAX_SECONDARY_TOTAL: i32 = 40;
pub const FIXED_MODE_MAX_SECONDARIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionMode {
    Fixed,
    Tactical,
}

impl MissionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Tactical => "tactical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fixed" => Some(Self::Fixed),
            "tactical" => Some(Self::Tactical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Audit event kinds written alongside every session mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    SessionStarted,
    SecondariesUpdated,
    MissionModeChanged,
    ScoreUpdated,
    RoundAdvanced,
    CommandPointsAdjusted,
    StratagemUsed,
    SessionEnded,
}

impl SessionEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionStarted => "session_started",
            Self::SecondariesUpdated => "secondaries_updated",
            Self::MissionModeChanged => "mission_mode_changed",
            Self::ScoreUpdated => "score_updated",
            Self::RoundAdvanced => "round_advanced",
            Self::CommandPointsAdjusted => "command_points_adjusted",
            Self::StratagemUsed => "stratagem_used",
            Self::SessionEnded => "session_ended",
        }
    }
}

/// Secondary objective and the points scored on it. Stored as JSON on the session row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secondary {
    pub name: String,
    pub points: i32,
}

impl Secondary {
    pub fn from_dto(dto: SecondaryDto) -> Self {
        Self {
            name: dto.name,
            points: dto.points,
        }
    }

    pub fn into_dto(self) -> SecondaryDto {
        SecondaryDto {
            name: self.name,
            points: self.points,
        }
    }
}

/// Checks a full secondaries list against the mission mode.
///
/// Names must be non-empty, each entry scores 0..=20, the total is capped at 40 and
/// fixed mode allows at most two secondaries.
///
/// # Returns
/// - `Err(String)` - Message for a 400 response
pub fn validate_secondaries(mode: MissionMode, secondaries: &[Secondary]) -> Result<(), String> {
    if mode == MissionMode::Fixed && secondaries.len() > FIXED_MODE_MAX_SECONDARIES {
        return Err(format!(
            "Fixed missions allow at most {} secondaries",
            FIXED_MODE_MAX_SECONDARIES
        ));
    }

    for secondary in secondaries {
        if secondary.name.trim().is_empty() {
            return Err("Secondary name must not be empty".to_string());
        }
        if !(0..=MAX_SECONDARY_POINTS).contains(&secondary.points) {
            return Err(format!(
                "Secondary '{}' must score between 0 and {} points",
                secondary.name, MAX_SECONDARY_POINTS
            ));
        }
    }

    let total: i32 = secondaries.iter().map(|s| s.points).sum();
    if total > MAX_SECONDARY_TOTAL {
        return Err(format!(
            "Secondaries total {} exceeds the maximum of {}",
            total, MAX_SECONDARY_TOTAL
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub id: i32,
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub mission_id: Option<i32>,
    pub opponent: Option<String>,
    pub mission_mode: MissionMode,
    pub status: SessionStatus,
    pub battle_round: i32,
    pub command_points: i32,
    pub primary_score: i32,
    pub secondaries: Vec<Secondary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// # Returns
    /// - `Err(InternalError::MalformedJson)` - Stored secondaries are not a list of secondaries
    pub fn from_entity(entity: entity::game_session::Model) -> Result<Self, InternalError> {
        let secondaries = serde_json::from_value(entity.secondaries).map_err(|source| {
            InternalError::MalformedJson {
                table: "game_session",
                column: "secondaries",
                id: entity.id,
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            army_id: entity.army_id,
            mission_id: entity.mission_id,
            opponent: entity.opponent,
            mission_mode: MissionMode::parse(&entity.mission_mode).unwrap_or(MissionMode::Fixed),
            status: if entity.status == SessionStatus::Completed.as_str() {
                SessionStatus::Completed
            } else {
                SessionStatus::Active
            },
            battle_round: entity.battle_round,
            command_points: entity.command_points,
            primary_score: entity.primary_score,
            secondaries,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            ended_at: entity.ended_at,
        })
    }

    pub fn total_score(&self) -> i32 {
        self.primary_score + self.secondaries.iter().map(|s| s.points).sum::<i32>()
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn into_dto(self) -> GameSessionDto {
        let total_score = self.total_score();
        GameSessionDto {
            id: self.id,
            army_id: self.army_id,
            mission_id: self.mission_id,
            opponent: self.opponent,
            mission_mode: self.mission_mode.as_str().to_string(),
            status: self.status.as_str().to_string(),
            battle_round: self.battle_round,
            command_points: self.command_points,
            primary_score: self.primary_score,
            secondaries: self.secondaries.into_iter().map(Secondary::into_dto).collect(),
            total_score,
            created_at: self.created_at,
            updated_at: self.updated_at,
            ended_at: self.ended_at,
        }
    }
}

pub fn sessions_page_into_dto(page: Page<GameSession>) -> PaginatedGameSessionsDto {
    PaginatedGameSessionsDto {
        sessions: page.items.into_iter().map(GameSession::into_dto).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub id: i32,
    pub session_id: i32,
    pub user_id: i32,
    pub kind: String,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SessionEvent {
    pub fn from_entity(entity: entity::session_event::Model) -> Self {
        Self {
            id: entity.id,
            session_id: entity.session_id,
            user_id: entity.user_id,
            kind: entity.kind,
            payload: entity.payload,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SessionEventDto {
        SessionEventDto {
            id: self.id,
            kind: self.kind,
            payload: self.payload,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameSessionParam {
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub mission_id: Option<i32>,
    pub opponent: Option<String>,
    pub mission_mode: MissionMode,
}

impl CreateGameSessionParam {
    /// Builds the param for `user_id`. Sessions default to fixed secondaries.
    ///
    /// # Returns
    /// - `Err(String)` - Unknown mission mode, message for a 400 response
    pub fn from_dto(user_id: i32, dto: CreateGameSessionDto) -> Result<Self, String> {
        let mission_mode = match dto.mission_mode.as_deref() {
            None => MissionMode::Fixed,
            Some(mode) => MissionMode::parse(mode)
                .ok_or_else(|| format!("Unknown mission mode '{}', expected fixed or tactical", mode))?,
        };

        Ok(Self {
            user_id,
            army_id: dto.army_id,
            mission_id: dto.mission_id,
            opponent: dto.opponent,
            mission_mode,
        })
    }
}
