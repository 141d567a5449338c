use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{BotError, Result};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Delivers text messages to the configured chat.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram Bot API client bound to a single chat
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(api_url: String, token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            token,
            chat_id,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url.trim_end_matches('/'), self.token, method)
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, text: &str) -> Result<()> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // The bot token is part of the URL, keep it out of error messages
        let resp = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::SendMessage(e.without_url().to_string()))?;

        let status = resp.status();
        let resp_body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(BotError::SendMessage(format!(
                "Telegram API non-2xx: {status} body={resp_body}"
            )));
        }

        let parsed: ApiResponse = serde_json::from_str(&resp_body)
            .map_err(|e| BotError::SendMessage(format!("unexpected Telegram response: {e}")))?;
        if !parsed.ok {
            return Err(BotError::SendMessage(
                parsed
                    .description
                    .unwrap_or_else(|| "Telegram API returned ok=false".to_string()),
            ));
        }
        Ok(())
    }
}

/// Send `text` and swallow any failure.
///
/// Delivery errors are logged and never reach the caller.
pub async fn send_message<M: Messenger + ?Sized>(messenger: &M, text: &str) {
    match messenger.send(text).await {
        Ok(()) => info!("Message sent successfully"),
        Err(e) => error!("Failed to send message: {}", e),
    }
}
