use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::{
        admin::code::AdminCodeService,
        generator::{BriefGenerator, OpenAiBriefGenerator},
    },
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the shared HTTP client.
///
/// Redirects are never followed so user-influenced URLs cannot bounce requests
/// to internal hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord auth URL: {}", e)))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord token URL: {}", e)))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord redirect URL: {}", e)))?;

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Builds the brief generator used by the dossier endpoints.
pub fn setup_brief_generator(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn BriefGenerator> {
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, brief generation is disabled");
    }

    Arc::new(OpenAiBriefGenerator::new(
        http_client,
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    ))
}

/// Generates a bootstrap admin login link when no admin exists yet.
///
/// The link embeds a one-time code valid for ten minutes and is only written to the
/// server log, so whoever operates the server can claim the first admin account.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;
    let login_url = format!("{}/api/auth/login?admin_code={}", config.app_url, code);

    tracing::info!("No admin user exists. Log in within 10 minutes to become admin: {}", login_url);

    Ok(())
}
