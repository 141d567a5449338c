use anyhow::{Context, Result};
use chrono::Utc;
use dotenv::dotenv;
use homework_bot_rust::config::Config;
use homework_bot_rust::logging;
use homework_bot_rust::poller::Poller;
use homework_rust_core::clients::{PracticumClient, TelegramClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cfg = Config::from_env()?;
    logging::init(&cfg.log_file)?;

    info!("Starting homework status bot...");

    if !cfg.credentials.check() {
        anyhow::bail!("Required environment variables are missing, see the log for details");
    }
    let tokens = cfg
        .credentials
        .tokens()
        .context("Required environment variables are missing")?;

    info!(
        "Config: endpoint={} telegram_api={} retry={}s log_file={}",
        cfg.practicum_endpoint,
        cfg.telegram_api_url,
        cfg.retry_interval.as_secs(),
        cfg.log_file.display(),
    );

    let source = PracticumClient::new(cfg.practicum_endpoint.clone(), tokens.practicum_token);
    let bot = TelegramClient::new(
        cfg.telegram_api_url.clone(),
        tokens.telegram_token,
        tokens.chat_id,
    );

    let poller = Poller::new(source, bot, cfg.retry_interval, Utc::now().timestamp());
    poller.run().await;

    Ok(())
}
