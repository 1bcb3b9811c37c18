//! Process configuration from the environment

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("$PORT must be set")]
    MissingPort,
    #[error("$PORT is not a valid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// SQLite file holding the joke corpus
    pub db_path: PathBuf,
    /// Skill application id requests must carry, when set
    pub skill_app_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT").ok_or(ConfigError::MissingPort)?;
        let port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        let db_path = lookup("NERDY_JOKER_DB_PATH").map_or_else(
            || {
                let home = lookup("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(home).join(".nerdy-joker").join("jokes.db")
            },
            PathBuf::from,
        );

        let skill_app_id = lookup("ALEXA_SKILL_APP_ID").filter(|id| !id.is_empty());

        Ok(Self {
            port,
            db_path,
            skill_app_id,
        })
    }
}
