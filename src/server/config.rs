use std::str::FromStr;

use crate::server::error::config::ConfigError;

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SIGNUP_TOKEN_GRANT: i64 = 10;
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 2;
const DEFAULT_RATE_LIMIT_BURST: u32 = 20;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub app_url: String,
    pub bind_addr: String,

    /// Tokens credited to a user on their first login.
    pub signup_token_grant: i64,

    /// Requests each client IP regains per second.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,

    /// Brief generation answers 503 while this is unset.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,

    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            signup_token_grant: parsed("SIGNUP_TOKEN_GRANT", DEFAULT_SIGNUP_TOKEN_GRANT)?,
            rate_limit_per_second: positive("RATE_LIMIT_PER_SECOND", DEFAULT_RATE_LIMIT_PER_SECOND)?,
            rate_limit_burst: positive("RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?,
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_model: optional("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            log_format: log_format()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn positive<T: FromStr + Default + PartialEq + ToString>(
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    let value = parsed(name, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

pub(crate) fn log_format() -> Result<LogFormat, ConfigError> {
    match optional("LOG_FORMAT").as_deref() {
        None | Some("compact") => Ok(LogFormat::Compact),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: "LOG_FORMAT".to_string(),
            value: other.to_string(),
        }),
    }
}
