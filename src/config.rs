//! Startup configuration resolved once from the environment.

use crate::ai::gemini::client::DEFAULT_BASE_URL;
use crate::{Error, Result};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {}", raw)))?,
            None => {
                tracing::info!(
                    "No PORT environment variable detected, defaulting to {}",
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        };

        let gemini_timeout = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.parse().map_err(|_| {
                Error::Config(format!("GEMINI_TIMEOUT_SECS is not a number: {}", raw))
            })?)),
            None => None,
        };

        Ok(Self {
            port,
            gemini_api_key: var("GEMINI_API_KEY")
                .ok_or_else(|| Error::Config("GEMINI_API_KEY not set".to_string()))?,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gemini_timeout,
        })
    }
}
