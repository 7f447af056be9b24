//! Game session and session event repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use serde_json::{json, Value};

use crate::server::{
    error::AppError,
    model::game_session::{
        CreateGameSessionParam, GameSession, SessionEvent, SessionEventKind, SessionStatus,
    },
    util::pagination::{Page, PaginationParams},
};

/// Command points a new session starts with.
pub const STARTING_COMMAND_POINTS: i32 = 1;

pub struct GameSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active session in battle round 1 with no score.
    pub async fn create(&self, param: CreateGameSessionParam) -> Result<GameSession, AppError> {
        let now = Utc::now();
        let entity = entity::game_session::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            army_id: ActiveValue::Set(param.army_id),
            mission_id: ActiveValue::Set(param.mission_id),
            opponent: ActiveValue::Set(param.opponent),
            mission_mode: ActiveValue::Set(param.mission_mode.as_str().to_string()),
            status: ActiveValue::Set(SessionStatus::Active.as_str().to_string()),
            battle_round: ActiveValue::Set(1),
            command_points: ActiveValue::Set(STARTING_COMMAND_POINTS),
            primary_score: ActiveValue::Set(0),
            secondaries: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameSession::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameSession>, AppError> {
        let Some(entity) = entity::prelude::GameSession::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(GameSession::from_entity(entity)?))
    }

    /// Gets a user's sessions, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<GameSession>, AppError> {
        let select = entity::prelude::GameSession::find()
            .filter(entity::game_session::Column::UserId.eq(user_id))
            .order_by_desc(entity::game_session::Column::CreatedAt)
            .order_by_desc(entity::game_session::Column::Id);

        let page = super::fetch_page(self.db, select, params).await?;
        let items = page
            .items
            .into_iter()
            .map(GameSession::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        })
    }

    /// Writes the mutable state of a session back to its row.
    ///
    /// Only active sessions are updated, so a session completed by a concurrent request
    /// is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - Session missing or already completed
    pub async fn save_state(&self, session: &GameSession) -> Result<bool, DbErr> {
        let result = entity::prelude::GameSession::update_many()
            .set(entity::game_session::ActiveModel {
                mission_mode: ActiveValue::Set(session.mission_mode.as_str().to_string()),
                status: ActiveValue::Set(session.status.as_str().to_string()),
                battle_round: ActiveValue::Set(session.battle_round),
                command_points: ActiveValue::Set(session.command_points),
                primary_score: ActiveValue::Set(session.primary_score),
                secondaries: ActiveValue::Set(json!(session.secondaries)),
                updated_at: ActiveValue::Set(session.updated_at),
                ended_at: ActiveValue::Set(session.ended_at),
                ..Default::default()
            })
            .filter(entity::game_session::Column::Id.eq(session.id))
            .filter(entity::game_session::Column::Status.eq(SessionStatus::Active.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn insert_event(
        &self,
        session_id: i32,
        user_id: i32,
        kind: SessionEventKind,
        payload: Value,
    ) -> Result<SessionEvent, DbErr> {
        let entity = entity::session_event::ActiveModel {
            session_id: ActiveValue::Set(session_id),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            payload: ActiveValue::Set(payload),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SessionEvent::from_entity(entity))
    }

    /// Gets the audit trail of a session, oldest first.
    pub async fn get_events(&self, session_id: i32) -> Result<Vec<SessionEvent>, DbErr> {
        let entities = entity::prelude::SessionEvent::find()
            .filter(entity::session_event::Column::SessionId.eq(session_id))
            .order_by_asc(entity::session_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SessionEvent::from_entity).collect())
    }

    pub async fn count_by_mission(&self, mission_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GameSession::find()
            .filter(entity::game_session::Column::MissionId.eq(mission_id))
            .count(self.db)
            .await
    }
}
