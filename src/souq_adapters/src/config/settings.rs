use config::{Config, ConfigError, Environment, File};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::env;

/// Runtime configuration for the shop service.
///
/// Loaded once at startup and passed explicitly to whatever needs it.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl Settings {
    /// Load settings from defaults, an optional `config/default` file and
    /// `SOUQ__`-prefixed environment variables.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` always win over every other source.
    /// Fails when no database url or JWT secret is configured at all.
    pub fn load() -> Result<Self, ConfigError> {
        let allowed_origins = std::env::var(env::ALLOWED_ORIGINS_ENV_VAR)
            .ok()
            .map(|origins| origins.split(',').map(str::to_string).collect::<Vec<_>>());

        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 4000_i64)?
            .set_default("postgres.max_connections", 5_i64)?
            .set_default("auth.jwt.time_to_live", 3600_i64)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("SOUQ")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option("auth.jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("auth.allowed_origins", allowed_origins)?
            .build()?
            .try_deserialize()
    }
}

/// Origins allowed to make cross-site requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        Self(origins)
    }
}
