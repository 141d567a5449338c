use homework_rust_core::models::HomeworkStatus;
use homework_rust_core::{BotError, Result};
use serde_json::Value;
use std::fmt::Display;
use tracing::error;

pub const GREETING: &str = "Hello!";
pub const NOT_SUBMITTED: &str = "work not yet submitted for review";

fn required<'a>(homework: &'a Value, key: &'static str) -> Result<&'a Value> {
    homework.get(key).ok_or_else(|| {
        let err = BotError::MissingKey(key);
        error!("{}", err);
        err
    })
}

/// Build the chat message for a homework record.
///
/// A record whose name or status is `null` has not been submitted yet and
/// yields [`NOT_SUBMITTED`] instead of an error.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = required(homework, "homework_name")?;
    let status = required(homework, "status")?;

    if name.is_null() || status.is_null() {
        return Ok(NOT_SUBMITTED.to_string());
    }

    let status: HomeworkStatus = match status.as_str() {
        Some(s) => s.parse(),
        None => Err(BotError::UnknownStatus(status.to_string())),
    }
    .map_err(|e| {
        error!("{}", e);
        e
    })?;

    let name = match name.as_str() {
        Some(s) => s.to_string(),
        None => name.to_string(),
    };

    Ok(format!("Status changed for work \"{name}\". {}", status.verdict()))
}

/// Message reported to the chat when an iteration fails
pub fn failure_message(err: &dyn Display) -> String {
    format!("Program failure: {err}")
}
