use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

use homework_rust_core::clients::{practicum, telegram};

pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "hw_logger.log";

/// Secrets the bot cannot run without. Values are `None` when the
/// variable is unset or empty.
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub chat_id: Option<String>,
}

/// Credentials after a successful presence check.
#[derive(Clone)]
pub struct Tokens {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: String,
}

impl Credentials {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            practicum_token: get("PRACTICUM_TOKEN"),
            telegram_token: get("TELEGRAM_TOKEN"),
            chat_id: get("CHAT_ID"),
        }
    }

    fn entries(&self) -> [(&'static str, Option<&String>); 3] {
        [
            ("PRACTICUM_TOKEN", self.practicum_token.as_ref()),
            ("TELEGRAM_TOKEN", self.telegram_token.as_ref()),
            ("CHAT_ID", self.chat_id.as_ref()),
        ]
    }

    /// Returns true when all required variables are present.
    /// Every missing variable gets its own log line.
    pub fn check(&self) -> bool {
        let mut ok = true;
        for (key, value) in self.entries() {
            if value.is_none() {
                error!("CRITICAL: missing required environment variable {}", key);
                ok = false;
            }
        }
        ok
    }

    pub fn tokens(&self) -> Option<Tokens> {
        Some(Tokens {
            practicum_token: self.practicum_token.clone()?,
            telegram_token: self.telegram_token.clone()?,
            chat_id: self.chat_id.clone()?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &Option<String>| if v.is_some() { "<set>" } else { "<missing>" };
        f.debug_struct("Credentials")
            .field("practicum_token", &mask(&self.practicum_token))
            .field("telegram_token", &mask(&self.telegram_token))
            .field("chat_id", &mask(&self.chat_id))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    pub practicum_endpoint: String,
    pub telegram_api_url: String,

    pub retry_interval: Duration,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup);

        let practicum_endpoint = lookup("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| practicum::DEFAULT_ENDPOINT.to_string());

        let telegram_api_url =
            lookup("TELEGRAM_API_URL").unwrap_or_else(|| telegram::DEFAULT_API_URL.to_string());

        let retry_time_secs = parse_u64(&lookup, "RETRY_TIME_SECS", DEFAULT_RETRY_TIME_SECS)
            .context("RETRY_TIME_SECS")?;

        let log_file = lookup("LOG_FILE")
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
            .into();

        Ok(Self {
            credentials,
            practicum_endpoint,
            telegram_api_url,
            retry_interval: Duration::from_secs(retry_time_secs),
            log_file,
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer seconds)"))
}
