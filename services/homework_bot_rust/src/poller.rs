//! Poll-check-notify loop
//!
//! Startup sends a greeting, then every iteration fetches the latest
//! homework status, turns it into a chat message and delivers it. Any
//! failure is logged and reported to the chat; the loop never exits.

use std::time::Duration;

use homework_rust_core::clients::{send_message, HomeworkSource, Messenger};
use homework_rust_core::{BotError, Result};
use tracing::{debug, error, info};

use crate::formatters::{failure_message, parse_status, GREETING};
use crate::validation::{check_response, current_date};

pub struct Poller<S, M> {
    source: S,
    messenger: M,
    retry_interval: Duration,
    /// `from_date` sent with the next fetch
    cursor: i64,
    /// Last status message delivered to the chat
    last_status: Option<String>,
    /// Last failure report delivered to the chat
    last_failure: Option<String>,
}

impl<S: HomeworkSource, M: Messenger> Poller<S, M> {
    pub fn new(source: S, messenger: M, retry_interval: Duration, cursor: i64) -> Self {
        Self {
            source,
            messenger,
            retry_interval,
            cursor,
            last_status: None,
            last_failure: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run forever: greet, then poll every `retry_interval`.
    pub async fn run(mut self) {
        self.startup().await;
        loop {
            self.poll_once().await;
            debug!("Sleeping {}s until next poll", self.retry_interval.as_secs());
            tokio::time::sleep(self.retry_interval).await;
        }
    }

    pub async fn startup(&self) {
        info!("Bot started, polling from_date={}", self.cursor);
        send_message(&self.messenger, GREETING).await;
    }

    /// One iteration. Errors never escape; they are reported instead.
    pub async fn poll_once(&mut self) {
        if let Err(e) = self.check_homework().await {
            self.report_failure(&e).await;
        }
    }

    async fn check_homework(&mut self) -> Result<()> {
        let response = self.source.get_api_answer(self.cursor).await?;
        let homework = check_response(&response)?;
        info!("Homework status update received");
        let message = parse_status(homework)?;

        if self.last_status.as_deref() == Some(message.as_str()) {
            debug!("Status unchanged, nothing to send");
        } else {
            // Delivery failures propagate so the same status is retried next time
            self.messenger.send(&message).await?;
            info!("Status message sent: {}", message);
            self.last_status = Some(message);
        }

        if let Some(next) = current_date(&response) {
            debug!("Advancing from_date {} -> {}", self.cursor, next);
            self.cursor = next;
        }
        // A failure seen again after a good poll is a new failure
        self.last_failure = None;
        Ok(())
    }

    async fn report_failure(&mut self, err: &BotError) {
        let message = failure_message(err);
        error!("{}", message);

        if self.last_failure.as_deref() == Some(message.as_str()) {
            debug!("Same failure already reported to the chat");
            return;
        }

        match self.messenger.send(&message).await {
            Ok(()) => {
                info!("Failure report sent");
                self.last_failure = Some(message);
            }
            Err(e) => error!("Failed to send message: {}", e),
        }
    }
}
