//! Practicum homework API client
//!
//! Fetches review statuses of the student's homeworks submitted since a
//! given unix timestamp.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{BotError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Source of homework status answers.
///
/// Implemented by [`PracticumClient`]; the poller only depends on this trait.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch the raw API answer for homeworks updated since `from_date`
    /// (unix seconds). The body is returned untyped so its shape can be
    /// validated separately.
    async fn get_api_answer(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the `homework_statuses` endpoint
#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        debug!("Fetching homework statuses from {} (from_date={})", self.endpoint, from_date);

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!("Request to API server failed: {}", e);
                BotError::Request(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("API server is not responding, status code: {}", status);
            return Err(BotError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read API server response: {}", e);
            BotError::Request(e)
        })?;
        serde_json::from_str(&body).map_err(|e| {
            error!("API server returned invalid JSON: {}", e);
            BotError::InvalidJson(e.to_string())
        })
    }
}
