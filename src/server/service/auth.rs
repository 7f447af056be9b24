//! Discord OAuth2 login and the user upsert that follows it.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        token::LedgerKind,
        user::{UpsertUserParam, User},
    },
    service::ledger::Ledger,
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Subset of Discord's `/users/@me` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
}

impl DiscordUser {
    /// Display name, falling back to the unique username.
    pub fn display_name(&self) -> &str {
        self.global_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Service for the Discord OAuth2 authorization code flow.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Builds the Discord authorize URL with a fresh CSRF token.
    ///
    /// Only the `identify` scope is requested.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Exchanges the authorization code and signs the Discord user in.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the callback query
    /// - `set_admin` - Grant admin; only true when a bootstrap code was consumed
    ///
    /// # Returns
    /// - `Ok(User)` - Stored user after the upsert and any signup grant
    /// - `Err(AuthError::TokenExchangeFailed)` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Fetching the Discord profile failed
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
        signup_grant: i64,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let discord_user = self.fetch_discord_user(&token).await?;

        self.sign_in(discord_user, set_admin, signup_grant).await
    }

    /// Upserts the Discord user and credits the signup grant to new accounts.
    ///
    /// The insert and the grant share one transaction, so a new user never exists without
    /// the ledger entry explaining their starting balance. Returning users are only
    /// renamed.
    pub async fn sign_in(
        &self,
        discord_user: DiscordUser,
        set_admin: bool,
        signup_grant: i64,
    ) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let upserted = UserRepository::new(&txn)
            .upsert(UpsertUserParam {
                name: discord_user.display_name().to_string(),
                discord_id: discord_user.id,
                is_admin: set_admin.then_some(true),
            })
            .await?;

        let mut user = upserted.user;

        if upserted.created && signup_grant > 0 {
            let entry = Ledger::new(&txn)
                .credit(
                    user.id,
                    signup_grant,
                    LedgerKind::SignupGrant,
                    None,
                    Some("Welcome grant".to_string()),
                )
                .await?;
            user.token_balance = entry.balance_after;
        }

        txn.commit().await?;

        if upserted.created {
            tracing::info!(user_id = user.id, "Registered new user");
        }
        if set_admin {
            tracing::info!(user_id = user.id, "User {} has been set as admin", user.name);
        }

        Ok(user)
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(DISCORD_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
