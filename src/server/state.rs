//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{admin::code::AdminCodeService, generator::BriefGenerator};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection and reqwest client share
/// their pools, the admin code service and generator sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirect following. Used for Discord and the brief generator.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// One-time admin bootstrap codes.
    pub admin_code_service: AdminCodeService,

    /// Produces brief markdown for an army list.
    pub brief_generator: Arc<dyn BriefGenerator>,

    /// Application base URL. Users land here after login and logout.
    pub app_url: String,

    /// Tokens credited to a user on their first login.
    pub signup_token_grant: i64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup; the result is handed to the Axum router.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        admin_code_service: AdminCodeService,
        brief_generator: Arc<dyn BriefGenerator>,
        app_url: String,
        signup_token_grant: i64,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_code_service,
            brief_generator,
            app_url,
            signup_token_grant,
        }
    }
}
