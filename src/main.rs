mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, logging, router, scheduler::purchase_expiry,
    service::admin::code::AdminCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init_logger(config.log_format);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let brief_generator = startup::setup_brief_generator(&config, http_client.clone());

    let admin_code_service = AdminCodeService::new();

    tracing::info!("Starting server");

    // Check for admin users and generate login link if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = purchase_expiry::start_scheduler(scheduler_db).await {
            tracing::error!("Purchase expiry scheduler error: {}", e);
        }
    });

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        admin_code_service,
        brief_generator,
        config.app_url.clone(),
        config.signup_token_grant,
    );
    let app = router::with_layers(router::router().with_state(state).layer(session), &config)?;

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
