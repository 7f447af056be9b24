//! Route table, OpenAPI document and the outer middleware stack.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        controller::{
            army, auth, brief, datasheet, detachment, faction, feature_cost, game_session,
            mission, stratagem, token, user,
        },
        error::AppError,
        state::AppState,
    },
};

/// How often idle rate limit buckets are dropped.
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(OpenApi)]
#[openapi(
    info(title = "Warbrief API", description = "Army lists, briefs, game sessions and tokens"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        user::get_all_users,
        user::set_admin,
        faction::list_factions,
        faction::get_faction,
        faction::create_faction,
        faction::update_faction,
        faction::delete_faction,
        faction::set_faction_icon,
        faction::clear_faction_icon,
        detachment::list_detachments,
        detachment::get_detachment,
        detachment::create_detachment,
        detachment::update_detachment,
        detachment::delete_detachment,
        detachment::set_detachment_icon,
        detachment::clear_detachment_icon,
        feature_cost::list_feature_costs,
        feature_cost::create_feature_cost,
        feature_cost::update_feature_cost,
        feature_cost::delete_feature_cost,
        token::get_balance,
        token::get_ledger,
        token::get_costs,
        token::get_packages,
        token::purchase,
        token::get_purchases,
        token::adjust_tokens,
        token::get_all_purchases,
        token::complete_purchase,
        token::cancel_purchase,
        army::list_own_armies,
        army::army_gallery,
        army::get_army,
        army::create_army,
        army::update_army,
        army::delete_army,
        brief::create_brief,
        brief::regenerate_brief,
        brief::edit_brief,
        brief::set_current_version,
        brief::set_visibility,
        brief::get_brief,
        brief::list_versions,
        brief::get_version,
        brief::delete_brief,
        brief::list_own_briefs,
        brief::brief_gallery,
        datasheet::list_datasheets,
        datasheet::get_datasheet,
        datasheet::list_versions,
        datasheet::admin_list_datasheets,
        datasheet::create_datasheet,
        datasheet::update_profile,
        datasheet::set_current_version,
        datasheet::set_enabled,
        mission::list_missions,
        mission::get_mission,
        mission::create_mission,
        mission::update_mission,
        mission::delete_mission,
        stratagem::search_stratagems,
        stratagem::get_stratagem,
        stratagem::create_stratagem,
        stratagem::update_stratagem,
        stratagem::delete_stratagem,
        game_session::create_session,
        game_session::list_sessions,
        game_session::get_session,
        game_session::update_secondaries,
        game_session::set_mission_mode,
        game_session::set_primary_score,
        game_session::next_round,
        game_session::adjust_command_points,
        game_session::use_stratagem,
        game_session::end_session,
        game_session::list_events,
        game_session::get_rules,
    ),
    components(schemas(ErrorDto)),
    tags(
        (name = auth::AUTH_TAG, description = "Discord login"),
        (name = user::USER_TAG, description = "User administration"),
        (name = faction::FACTION_TAG, description = "Factions"),
        (name = detachment::DETACHMENT_TAG, description = "Detachments"),
        (name = feature_cost::FEATURE_COST_TAG, description = "Feature prices"),
        (name = token::TOKEN_TAG, description = "Token balance, ledger and purchases"),
        (name = army::ARMY_TAG, description = "Army lists"),
        (name = brief::BRIEF_TAG, description = "Generated briefs"),
        (name = datasheet::DATASHEET_TAG, description = "Datasheets"),
        (name = mission::MISSION_TAG, description = "Missions"),
        (name = stratagem::STRATAGEM_TAG, description = "Stratagems"),
        (name = game_session::GAME_SESSION_TAG, description = "Live game tracking")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // users
        .route("/api/admin/users", get(user::get_all_users))
        .route("/api/admin/users/{user_id}/admin", put(user::set_admin))
        .route("/api/admin/users/{user_id}/tokens", post(token::adjust_tokens))
        // factions and detachments
        .route("/api/factions", get(faction::list_factions))
        .route("/api/factions/{faction_id}", get(faction::get_faction))
        .route(
            "/api/factions/{faction_id}/detachments",
            get(detachment::list_detachments),
        )
        .route("/api/detachments/{detachment_id}", get(detachment::get_detachment))
        .route("/api/admin/factions", post(faction::create_faction))
        .route(
            "/api/admin/factions/{faction_id}",
            put(faction::update_faction).delete(faction::delete_faction),
        )
        .route(
            "/api/admin/factions/{faction_id}/icon",
            put(faction::set_faction_icon).delete(faction::clear_faction_icon),
        )
        .route(
            "/api/admin/factions/{faction_id}/detachments",
            post(detachment::create_detachment),
        )
        .route(
            "/api/admin/detachments/{detachment_id}",
            put(detachment::update_detachment).delete(detachment::delete_detachment),
        )
        .route(
            "/api/admin/detachments/{detachment_id}/icon",
            put(detachment::set_detachment_icon).delete(detachment::clear_detachment_icon),
        )
        // feature costs
        .route(
            "/api/admin/feature-costs",
            get(feature_cost::list_feature_costs).post(feature_cost::create_feature_cost),
        )
        .route(
            "/api/admin/feature-costs/{cost_id}",
            put(feature_cost::update_feature_cost).delete(feature_cost::delete_feature_cost),
        )
        // tokens
        .route("/api/tokens/balance", get(token::get_balance))
        .route("/api/tokens/ledger", get(token::get_ledger))
        .route("/api/tokens/costs", get(token::get_costs))
        .route("/api/tokens/packages", get(token::get_packages))
        .route("/api/tokens/purchase", post(token::purchase))
        .route("/api/tokens/purchases", get(token::get_purchases))
        .route("/api/admin/purchases", get(token::get_all_purchases))
        .route(
            "/api/admin/purchases/{purchase_id}/complete",
            post(token::complete_purchase),
        )
        .route(
            "/api/admin/purchases/{purchase_id}/cancel",
            post(token::cancel_purchase),
        )
        // armies
        .route("/api/me/armies", get(army::list_own_armies))
        .route("/api/armies", get(army::army_gallery).post(army::create_army))
        .route(
            "/api/armies/{army_id}",
            get(army::get_army)
                .put(army::update_army)
                .delete(army::delete_army),
        )
        // briefs
        .route("/api/briefs", post(brief::create_brief))
        .route(
            "/api/briefs/{brief_id}",
            get(brief::get_brief).delete(brief::delete_brief),
        )
        .route("/api/briefs/{brief_id}/regenerate", post(brief::regenerate_brief))
        .route("/api/briefs/{brief_id}/content", put(brief::edit_brief))
        .route("/api/briefs/{brief_id}/current", put(brief::set_current_version))
        .route("/api/briefs/{brief_id}/visibility", put(brief::set_visibility))
        .route("/api/briefs/{brief_id}/versions", get(brief::list_versions))
        .route(
            "/api/briefs/{brief_id}/versions/{version}",
            get(brief::get_version),
        )
        .route("/api/me/briefs", get(brief::list_own_briefs))
        .route("/api/gallery/briefs", get(brief::brief_gallery))
        // datasheets
        .route("/api/datasheets", get(datasheet::list_datasheets))
        .route("/api/datasheets/{datasheet_id}", get(datasheet::get_datasheet))
        .route(
            "/api/datasheets/{datasheet_id}/versions",
            get(datasheet::list_versions),
        )
        .route(
            "/api/admin/datasheets",
            get(datasheet::admin_list_datasheets).post(datasheet::create_datasheet),
        )
        .route(
            "/api/admin/datasheets/{datasheet_id}",
            put(datasheet::update_profile),
        )
        .route(
            "/api/admin/datasheets/{datasheet_id}/current",
            put(datasheet::set_current_version),
        )
        .route(
            "/api/admin/datasheets/{datasheet_id}/enabled",
            put(datasheet::set_enabled),
        )
        // missions
        .route("/api/missions", get(mission::list_missions))
        .route("/api/missions/{mission_id}", get(mission::get_mission))
        .route("/api/admin/missions", post(mission::create_mission))
        .route(
            "/api/admin/missions/{mission_id}",
            put(mission::update_mission).delete(mission::delete_mission),
        )
        // stratagems
        .route("/api/stratagems", get(stratagem::search_stratagems))
        .route("/api/stratagems/{stratagem_id}", get(stratagem::get_stratagem))
        .route("/api/admin/stratagems", post(stratagem::create_stratagem))
        .route(
            "/api/admin/stratagems/{stratagem_id}",
            put(stratagem::update_stratagem).delete(stratagem::delete_stratagem),
        )
        // game sessions
        .route(
            "/api/sessions",
            get(game_session::list_sessions).post(game_session::create_session),
        )
        .route("/api/sessions/{session_id}", get(game_session::get_session))
        .route(
            "/api/sessions/{session_id}/secondaries",
            put(game_session::update_secondaries),
        )
        .route(
            "/api/sessions/{session_id}/mission-mode",
            put(game_session::set_mission_mode),
        )
        .route(
            "/api/sessions/{session_id}/score",
            put(game_session::set_primary_score),
        )
        .route(
            "/api/sessions/{session_id}/next-round",
            post(game_session::next_round),
        )
        .route(
            "/api/sessions/{session_id}/command-points",
            post(game_session::adjust_command_points),
        )
        .route(
            "/api/sessions/{session_id}/stratagems/{stratagem_id}/use",
            post(game_session::use_stratagem),
        )
        .route("/api/sessions/{session_id}/end", post(game_session::end_session))
        .route("/api/sessions/{session_id}/events", get(game_session::list_events))
        .route("/api/sessions/{session_id}/rules", get(game_session::get_rules))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Wraps the stateful router in tracing, CORS and per-IP rate limiting.
pub fn with_layers(router: Router, config: &Config) -> Result<Router, AppError> {
    let router = rate_limited(
        router,
        config.rate_limit_per_second,
        config.rate_limit_burst,
    )?;

    let origin = HeaderValue::from_str(&config.app_url)
        .map_err(|e| AppError::InternalError(format!("Invalid APP_URL for CORS: {}", e)))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(router.layer(cors).layer(TraceLayer::new_for_http()))
}

/// Limits each client IP to `per_second` requests per second with bursts of `burst`.
///
/// The limiter keys on `X-Forwarded-For`, `X-Real-IP` or the peer address, so the
/// server must be started with `into_make_service_with_connect_info::<SocketAddr>()`.
/// Requests over the limit are answered with 429.
pub fn rate_limited(router: Router, per_second: u64, burst: u32) -> Result<Router, AppError> {
    let period = replenish_period(per_second).ok_or_else(|| {
        AppError::InternalError(format!(
            "Rate limit of {} requests per second is out of range",
            per_second
        ))
    })?;

    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .period(period)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError(
                    "Rate limit period and burst size must be greater than zero".to_string(),
                )
            })?,
    );

    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(router.layer(GovernorLayer::new(governor_config)))
}

/// Time after which one request of the quota is replenished.
fn replenish_period(per_second: u64) -> Option<Duration> {
    if per_second == 0 {
        return None;
    }
    let nanos = 1_000_000_000 / per_second;
    (nanos > 0).then(|| Duration::from_nanos(nanos))
}
