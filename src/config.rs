// src/config.rs
use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::net::TcpListener;

use crate::services::provider::DEFAULT_BASE_URL;

/// Used when `OPENAI_API_KEY` is unset. Calls then fail at the provider.
pub const PLACEHOLDER_API_KEY: &str = "sk-test-key";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub openai: OpenAiConfig,
}

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("NOPICKLES_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("NOPICKLES_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("NOPICKLES_PORT must be a port number")?;
        let static_dir = env::var("NOPICKLES_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string());
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs: u64 = env::var("OPENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .context("OPENAI_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            host,
            port,
            static_dir: PathBuf::from(static_dir),
            openai: OpenAiConfig {
                api_key,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// Binds the listener. `host` may be an IP address or a resolvable name.
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to bind {}:{}", self.host, self.port))
    }
}
