//! Homework Core - shared pieces of the homework status bot.
//!
//! This module provides:
//! - `BotError`, the error kinds raised while polling and notifying
//! - The homework review status model and its verdict texts
//! - HTTP clients for the Practicum homework API and the Telegram Bot API

pub mod clients;
pub mod error;
pub mod models;

pub use error::{BotError, Result};
