//! Live game session tracking.
//!
//! Each mutation loads the session inside a transaction, checks ownership and that the
//! session is still active, applies the change and writes the new state together with an
//! audit event. A concurrent mutation that completed the session in between makes the
//! guarded update miss, which is reported as a conflict.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde_json::{json, Value};

use crate::server::{
    data::{
        army::ArmyRepository, game_session::GameSessionRepository, mission::MissionRepository,
        stratagem::StratagemRepository,
    },
    error::AppError,
    model::{
        game_session::{
            validate_secondaries, CreateGameSessionParam, GameSession, MissionMode, Secondary,
            SessionEvent, SessionEventKind, SessionStatus, MAX_BATTLE_ROUND, MAX_PRIMARY_SCORE,
        },
        mission::Mission,
        stratagem::{Stratagem, StratagemFilter},
    },
    util::{
        pagination::{Page, PaginationParams},
        validation,
    },
};

/// Mission and stratagems available to a session.
#[derive(Debug, Clone)]
pub struct SessionRules {
    pub mission: Option<Mission>,
    pub stratagems: Vec<Stratagem>,
}

pub struct GameSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a session in battle round 1.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Army not owned by the user, or unknown mission
    pub async fn create(&self, param: CreateGameSessionParam) -> Result<GameSession, AppError> {
        if let Some(army_id) = param.army_id {
            ArmyRepository::new(self.db)
                .find_by_id(army_id)
                .await?
                .filter(|army| army.user_id == param.user_id)
                .ok_or_else(|| AppError::NotFound("Army not found".to_string()))?;
        }

        if let Some(mission_id) = param.mission_id {
            MissionRepository::new(self.db)
                .find_by_id(mission_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;
        }

        let user_id = param.user_id;
        let param = CreateGameSessionParam {
            opponent: validation::optional_text(param.opponent),
            ..param
        };

        let txn = self.db.begin().await?;
        let repo = GameSessionRepository::new(&txn);
        let session = repo.create(param).await?;
        repo.insert_event(
            session.id,
            user_id,
            SessionEventKind::SessionStarted,
            json!({
                "army_id": session.army_id,
                "mission_id": session.mission_id,
                "mission_mode": session.mission_mode.as_str(),
                "command_points": session.command_points,
            }),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(session_id = session.id, user_id, "Started game session");

        Ok(session)
    }

    pub async fn list(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<GameSession>, AppError> {
        GameSessionRepository::new(self.db)
            .get_by_user_paginated(user_id, params)
            .await
    }

    pub async fn get(&self, user_id: i32, id: i32) -> Result<GameSession, AppError> {
        owned(self.db, user_id, id).await
    }

    /// Replaces the secondaries list.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - List breaks the mission mode's limits
    pub async fn update_secondaries(
        &self,
        user_id: i32,
        id: i32,
        secondaries: Vec<Secondary>,
    ) -> Result<GameSession, AppError> {
        let secondaries: Vec<Secondary> = secondaries
            .into_iter()
            .map(|s| Secondary {
                name: s.name.trim().to_string(),
                points: s.points,
            })
            .collect();

        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        validate_secondaries(session.mission_mode, &secondaries).map_err(AppError::BadRequest)?;

        let payload = json!({
            "before": session.secondaries,
            "after": secondaries,
        });
        session.secondaries = secondaries;

        record(txn, session, user_id, SessionEventKind::SecondariesUpdated, payload).await
    }

    /// Switches between fixed and tactical secondaries before round 2.
    ///
    /// Switching to fixed re-checks the current secondaries against the fixed limit.
    pub async fn set_mission_mode(
        &self,
        user_id: i32,
        id: i32,
        mode: MissionMode,
    ) -> Result<GameSession, AppError> {
        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        if session.battle_round != 1 {
            return Err(AppError::BadRequest(
                "Mission mode can only be changed in battle round 1".to_string(),
            ));
        }
        validate_secondaries(mode, &session.secondaries).map_err(AppError::BadRequest)?;

        let payload = json!({
            "from": session.mission_mode.as_str(),
            "to": mode.as_str(),
        });
        session.mission_mode = mode;

        record(txn, session, user_id, SessionEventKind::MissionModeChanged, payload).await
    }

    pub async fn set_primary(
        &self,
        user_id: i32,
        id: i32,
        primary: i32,
    ) -> Result<GameSession, AppError> {
        if !(0..=MAX_PRIMARY_SCORE).contains(&primary) {
            return Err(AppError::BadRequest(format!(
                "Primary score must be between 0 and {}",
                MAX_PRIMARY_SCORE
            )));
        }

        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        let payload = json!({
            "before": session.primary_score,
            "after": primary,
        });
        session.primary_score = primary;

        record(txn, session, user_id, SessionEventKind::ScoreUpdated, payload).await
    }

    /// Advances to the next battle round and grants one command point.
    pub async fn next_round(&self, user_id: i32, id: i32) -> Result<GameSession, AppError> {
        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        if session.battle_round >= MAX_BATTLE_ROUND {
            return Err(AppError::BadRequest(format!(
                "The game ends after battle round {}",
                MAX_BATTLE_ROUND
            )));
        }

        session.battle_round += 1;
        session.command_points += 1;
        let payload = json!({
            "battle_round": session.battle_round,
            "command_points": session.command_points,
        });

        record(txn, session, user_id, SessionEventKind::RoundAdvanced, payload).await
    }

    pub async fn adjust_command_points(
        &self,
        user_id: i32,
        id: i32,
        delta: i32,
    ) -> Result<GameSession, AppError> {
        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        let after = session
            .command_points
            .checked_add(delta)
            .filter(|cp| *cp >= 0)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Command points cannot drop below zero (have {}, delta {})",
                    session.command_points, delta
                ))
            })?;

        let payload = json!({
            "delta": delta,
            "before": session.command_points,
            "after": after,
        });
        session.command_points = after;

        record(txn, session, user_id, SessionEventKind::CommandPointsAdjusted, payload).await
    }

    /// Spends command points on a stratagem.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown stratagem
    /// - `Err(AppError::BadRequest)` - Stratagem belongs to another detachment, or too few CP
    pub async fn use_stratagem(
        &self,
        user_id: i32,
        id: i32,
        stratagem_id: i32,
    ) -> Result<GameSession, AppError> {
        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        let stratagem = StratagemRepository::new(&txn)
            .find_by_id(stratagem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stratagem not found".to_string()))?;

        let detachment_id = army_detachment(&txn, session.army_id).await?;
        if !stratagem.usable_by(detachment_id) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not available to this army",
                stratagem.name
            )));
        }

        if session.command_points < stratagem.cp_cost {
            return Err(AppError::BadRequest(format!(
                "'{}' costs {} CP but only {} remain",
                stratagem.name, stratagem.cp_cost, session.command_points
            )));
        }

        session.command_points -= stratagem.cp_cost;
        let payload = json!({
            "stratagem_id": stratagem.id,
            "name": stratagem.name,
            "cp_cost": stratagem.cp_cost,
            "battle_round": session.battle_round,
            "command_points": session.command_points,
        });

        record(txn, session, user_id, SessionEventKind::StratagemUsed, payload).await
    }

    pub async fn end(&self, user_id: i32, id: i32) -> Result<GameSession, AppError> {
        let txn = self.db.begin().await?;
        let mut session = active(&txn, user_id, id).await?;

        session.status = SessionStatus::Completed;
        session.ended_at = Some(Utc::now());
        let payload = json!({
            "battle_round": session.battle_round,
            "primary_score": session.primary_score,
            "total_score": session.total_score(),
        });

        record(txn, session, user_id, SessionEventKind::SessionEnded, payload).await
    }

    /// Audit trail of a session, oldest first.
    pub async fn events(&self, user_id: i32, id: i32) -> Result<Vec<SessionEvent>, AppError> {
        owned(self.db, user_id, id).await?;

        Ok(GameSessionRepository::new(self.db).get_events(id).await?)
    }

    /// Mission and the stratagems the session's army may use.
    pub async fn rules(&self, user_id: i32, id: i32) -> Result<SessionRules, AppError> {
        let session = owned(self.db, user_id, id).await?;

        let mission = match session.mission_id {
            Some(mission_id) => MissionRepository::new(self.db).find_by_id(mission_id).await?,
            None => None,
        };

        let detachment_id = army_detachment(self.db, session.army_id).await?;
        let stratagems = StratagemRepository::new(self.db)
            .search(&StratagemFilter {
                detachment_id,
                phase: None,
                include_core: true,
            })
            .await?;

        Ok(SessionRules {
            mission,
            stratagems,
        })
    }
}

async fn owned<C: ConnectionTrait>(db: &C, user_id: i32, id: i32) -> Result<GameSession, AppError> {
    GameSessionRepository::new(db)
        .find_by_id(id)
        .await?
        .filter(|session| session.user_id == user_id)
        .ok_or_else(|| AppError::NotFound("Game session not found".to_string()))
}

async fn active<C: ConnectionTrait>(db: &C, user_id: i32, id: i32) -> Result<GameSession, AppError> {
    let session = owned(db, user_id, id).await?;
    if session.is_completed() {
        return Err(completed());
    }
    Ok(session)
}

/// Detachment of the session's army. A deleted army leaves only core stratagems.
async fn army_detachment<C: ConnectionTrait>(
    db: &C,
    army_id: Option<i32>,
) -> Result<Option<i32>, AppError> {
    let Some(army_id) = army_id else {
        return Ok(None);
    };

    Ok(ArmyRepository::new(db)
        .find_by_id(army_id)
        .await?
        .and_then(|army| army.detachment_id))
}

/// Saves the mutated session with its audit event and commits.
async fn record(
    txn: DatabaseTransaction,
    mut session: GameSession,
    user_id: i32,
    kind: SessionEventKind,
    payload: Value,
) -> Result<GameSession, AppError> {
    session.updated_at = Utc::now();

    let repo = GameSessionRepository::new(&txn);
    if !repo.save_state(&session).await? {
        return Err(completed());
    }
    repo.insert_event(session.id, user_id, kind, payload).await?;
    txn.commit().await?;

    tracing::info!(
        session_id = session.id,
        user_id,
        event = kind.as_str(),
        "Recorded game session event"
    );

    Ok(session)
}

fn completed() -> AppError {
    AppError::Conflict("Game session has already ended".to_string())
}
