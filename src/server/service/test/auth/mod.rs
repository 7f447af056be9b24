use crate::server::{
    error::AppError,
    model::token::LedgerKind,
    service::auth::{AuthService, DiscordUser},
    state::OAuth2Client,
};
use oauth2::{AuthUrl, ClientId, RedirectUrl, TokenUrl};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod sign_in;

fn oauth_client() -> OAuth2Client {
    oauth2::basic::BasicClient::new(ClientId::new("client".to_string()))
        .set_auth_uri(AuthUrl::new("https://discord.test/oauth2/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("https://discord.test/api/oauth2/token".to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/api/auth/callback".to_string()).unwrap(),
        )
}

fn discord_user(id: &str, global_name: Option<&str>) -> DiscordUser {
    DiscordUser {
        id: id.to_string(),
        username: format!("user_{}", id),
        global_name: global_name.map(str::to_string),
    }
}
