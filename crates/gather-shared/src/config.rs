//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_COOKIE_NAME, DEFAULT_SESSION_EXPIRY, DEFAULT_SIGN_IN_PATH, DEVELOPMENT_SESSION_SECRET,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub auth: AuthSettings,
    pub authorization: AuthorizationSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub session_secret: String,
    pub session_expiry: i64,
    pub cookie_name: String,
    pub sign_in_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizationSettings {
    /// When set, update and destroy are limited to group leaders.
    pub require_leader_for_mutations: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    pub directory: Option<String>,
}

impl AppConfig {
    /// Load `.env`, then layer defaults, `config/default`, `config/{APP_ENV}`
    /// and `SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::load_for(&env)?;
        config.check()?;
        Ok(config)
    }

    pub fn load_for(env: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "gather-server")?
            .set_default("app.cors_origin", "http://localhost:5173")?
            .set_default("database.url", "postgres://localhost/gather")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("storage.backend", "postgres")?
            .set_default("auth.session_secret", DEVELOPMENT_SESSION_SECRET)?
            .set_default("auth.session_expiry", DEFAULT_SESSION_EXPIRY)?
            .set_default("auth.cookie_name", DEFAULT_COOKIE_NAME)?
            .set_default("auth.sign_in_path", DEFAULT_SIGN_IN_PATH)?
            .set_default("authorization.require_leader_for_mutations", false)?
            .set_default("log.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Refuse to run a production deployment on the development secret.
    pub fn check(&self) -> Result<(), AppError> {
        if self.app.env == "production" && self.auth.session_secret == DEVELOPMENT_SESSION_SECRET {
            return Err(AppError::InsecureConfig(
                "auth.session_secret must be set in production".to_string(),
            ));
        }
        Ok(())
    }
}
