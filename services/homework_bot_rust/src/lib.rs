//! Homework status bot
//!
//! Polls the Practicum homework API and relays review status changes to a
//! single Telegram chat.

pub mod config;
pub mod formatters;
pub mod logging;
pub mod poller;
pub mod validation;
