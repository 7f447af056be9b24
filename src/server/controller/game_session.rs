use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game_session::{
            CommandPointsDto, CreateGameSessionDto, GameSessionDto, MissionModeDto,
            PaginatedGameSessionsDto, PrimaryScoreDto, SessionEventDto, SessionRulesDto,
            UpdateSecondariesDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::game_session::{
            sessions_page_into_dto, CreateGameSessionParam, MissionMode, Secondary,
        },
        service::game_session::GameSessionService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping game session endpoints in OpenAPI documentation
pub static GAME_SESSION_TAG: &str = "game_session";

/// Starts a game session in battle round 1.
///
/// # Access Control
/// - Logged in; the army, if given, must be the caller's
///
/// # Returns
/// - `201 Created` - New session
/// - `400 Bad Request` - Unknown mission mode
/// - `404 Not Found` - Army not owned by the caller, or unknown mission
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = GAME_SESSION_TAG,
    request_body = CreateGameSessionDto,
    responses(
        (status = 201, description = "Started session", body = GameSessionDto),
        (status = 400, description = "Unknown mission mode", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Army or mission not found", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateGameSessionParam::from_dto(user.id, payload).map_err(AppError::BadRequest)?;
    let game = GameSessionService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = GAME_SESSION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Own sessions, newest first", body = PaginatedGameSessionsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = GameSessionService::new(&state.db)
        .list(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(sessions_page_into_dto(page))))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "Session", body = GameSessionDto),
        (status = 404, description = "Session not found", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .get(user.id, session_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Replaces the secondaries list.
///
/// # Returns
/// - `200 OK` - Updated session
/// - `400 Bad Request` - Blank name, points outside 0..=20, total above 40, or more than
///   two secondaries in fixed mode
/// - `409 Conflict` - Session already ended
#[utoipa::path(
    put,
    path = "/api/sessions/{session_id}/secondaries",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    request_body = UpdateSecondariesDto,
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Invalid secondaries", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn update_secondaries(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Json(payload): Json<UpdateSecondariesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let secondaries = payload
        .secondaries
        .into_iter()
        .map(Secondary::from_dto)
        .collect();
    let game = GameSessionService::new(&state.db)
        .update_secondaries(user.id, session_id, secondaries)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Switches between fixed and tactical secondaries. Only allowed in battle round 1.
#[utoipa::path(
    put,
    path = "/api/sessions/{session_id}/mission-mode",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    request_body = MissionModeDto,
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Unknown mode, past round 1, or secondaries exceed the fixed limit", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn set_mission_mode(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Json(payload): Json<MissionModeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mode = MissionMode::parse(&payload.mode).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unknown mission mode '{}', expected fixed or tactical",
            payload.mode
        ))
    })?;
    let game = GameSessionService::new(&state.db)
        .set_mission_mode(user.id, session_id, mode)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/sessions/{session_id}/score",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    request_body = PrimaryScoreDto,
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Score outside 0..=50", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn set_primary_score(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Json(payload): Json<PrimaryScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .set_primary(user.id, session_id, payload.primary)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Advances the battle round and grants one command point.
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/next-round",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Already in the last round", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn next_round(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .next_round(user.id, session_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/command-points",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    request_body = CommandPointsDto,
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Command points would drop below zero", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn adjust_command_points(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Json(payload): Json<CommandPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .adjust_command_points(user.id, session_id, payload.delta)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Spends command points on a stratagem.
///
/// # Returns
/// - `200 OK` - Session with the cost deducted
/// - `400 Bad Request` - Stratagem not available to the army, or too few command points
/// - `404 Not Found` - Unknown session or stratagem
/// - `409 Conflict` - Session already ended
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/stratagems/{stratagem_id}/use",
    tag = GAME_SESSION_TAG,
    params(
        ("session_id" = i32, Path, description = "Game session ID"),
        ("stratagem_id" = i32, Path, description = "Stratagem ID")
    ),
    responses(
        (status = 200, description = "Updated session", body = GameSessionDto),
        (status = 400, description = "Stratagem unavailable or unaffordable", body = ErrorDto),
        (status = 404, description = "Session or stratagem not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn use_stratagem(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, stratagem_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .use_stratagem(user.id, session_id, stratagem_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/end",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "Completed session", body = GameSessionDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto)
    ),
)]
pub async fn end_session(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game = GameSessionService::new(&state.db)
        .end(user.id, session_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/events",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "Audit events, oldest first", body = Vec<SessionEventDto>),
        (status = 404, description = "Session not found", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = GameSessionService::new(&state.db)
        .events(user.id, session_id)
        .await?;
    let dtos: Vec<SessionEventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mission and the stratagems the session's army can use: core ones plus its
/// detachment's.
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/rules",
    tag = GAME_SESSION_TAG,
    params(("session_id" = i32, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "Session rules", body = SessionRulesDto),
        (status = 404, description = "Session not found", body = ErrorDto)
    ),
)]
pub async fn get_rules(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rules = GameSessionService::new(&state.db)
        .rules(user.id, session_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SessionRulesDto {
            mission: rules.mission.map(|m| m.into_dto()),
            stratagems: rules.stratagems.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}
