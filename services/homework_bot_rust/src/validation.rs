//! Shape checks for the homework API answer.

use homework_rust_core::{BotError, Result};
use serde_json::Value;
use tracing::error;

fn reject<T>(err: BotError) -> Result<T> {
    error!("{}", err);
    Err(err)
}

/// Validate the raw API answer and return the most recent homework record.
///
/// Checks run in order: the root is an object, it has `homeworks`,
/// `homeworks` is a list, and the list is not empty.
pub fn check_response(response: &Value) -> Result<&Value> {
    let Some(root) = response.as_object() else {
        return reject(BotError::MalformedResponse(
            "API answer is not a JSON object".to_string(),
        ));
    };

    let Some(homeworks) = root.get("homeworks") else {
        return reject(BotError::MissingKey("homeworks"));
    };

    let Some(homeworks) = homeworks.as_array() else {
        return reject(BotError::MalformedResponse(
            "homeworks is not a list".to_string(),
        ));
    };

    match homeworks.first() {
        Some(homework) => Ok(homework),
        None => reject(BotError::EmptyResult),
    }
}

/// Server-side timestamp of the answer, used as the next `from_date`
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(|v| v.as_i64())
}
