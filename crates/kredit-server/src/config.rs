//! Server configuration.
//!
//! Sources, later overriding earlier:
//! 1. `kredit.{toml,yaml,json}` in the working directory (optional)
//! 2. Environment variables prefixed `KREDIT_`, nested keys separated
//!    by `__` (e.g. `KREDIT_DATABASE__URL`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use kredit_auth::AuthConfig;
use kredit_db::DbConfig;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "KREDIT";
const CONFIG_FILE: &str = "kredit";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("jwt_secret must be set")]
    MissingJwtSecret,

    #[error("encryption_key must be 64 hex characters: {0}")]
    InvalidEncryptionKey(String),
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordCost {
    fn default() -> Self {
        let auth = AuthConfig::default();
        Self {
            memory_kib: auth.password_memory_kib,
            iterations: auth.password_iterations,
            parallelism: auth.password_parallelism,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (default `0.0.0.0:8080`).
    pub bind_address: String,
    /// HMAC secret for session tokens. Required.
    pub jwt_secret: String,
    /// Hex-encoded 256-bit key for document encryption. Required.
    pub encryption_key: String,
    /// Session token lifetime in seconds.
    pub token_lifetime_secs: u64,
    pub pepper: Option<String>,
    pub password_cost: PasswordCost,
    pub database: DbConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".into(),
            jwt_secret: String::new(),
            encryption_key: String::new(),
            token_lifetime_secs: AuthConfig::default().token_lifetime_secs,
            pepper: None,
            password_cost: PasswordCost::default(),
            database: DbConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from the optional config file and `KREDIT_*` environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }
        Ok(config)
    }

    /// Derive the auth layer configuration, decoding the document key.
    pub fn auth_config(&self) -> Result<AuthConfig, ConfigError> {
        let bytes = hex::decode(self.encryption_key.trim())
            .map_err(|e| ConfigError::InvalidEncryptionKey(e.to_string()))?;
        let key: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| ConfigError::InvalidEncryptionKey(format!("{} bytes", b.len())))?;

        Ok(AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_lifetime_secs: self.token_lifetime_secs,
            pepper: self.pepper.clone(),
            password_memory_kib: self.password_cost.memory_kib,
            password_iterations: self.password_cost.iterations,
            password_parallelism: self.password_cost.parallelism,
            document_key: Some(key),
        })
    }
}
